use crate::model::{FloorType, SpaceType};
use crate::select::Subsystem;
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

// Brandbook colors
#[allow(dead_code)]
const BRAND_BG: Color = Color::Rgb(0xED, 0xED, 0xED); // #ededed - tło
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c - główny ciemny
#[allow(dead_code)]
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71 - akcent niebieski (reserved)
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0 - tło zaznaczenia
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68 - zielony (checked)
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c - pomarańczowy (focus)
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - przygaszony (footer)

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const CHECKED_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Survey Planner | {} | {} | {} floors | {} spaces | {} rooms ",
        app.building.name,
        app.subsystem().label(),
        app.building.floors.len(),
        app.building.total_spaces(),
        app.building.total_rooms()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(25), // Floors
        Constraint::Percentage(30), // Spaces
        Constraint::Percentage(45), // Rooms
    ])
    .split(area);

    draw_floors(frame, chunks[0], app);
    draw_spaces(frame, chunks[1], app);
    draw_rooms(frame, chunks[2], app);
}

fn panel_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn row_style(is_selected: bool, is_focused: bool) -> Style {
    if is_selected && is_focused {
        SELECTED_STYLE
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn draw_floors(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Floors;

    let items: Vec<ListItem> = app
        .building
        .floors
        .iter()
        .enumerate()
        .map(|(i, floor)| {
            let is_selected = i == app.selected_floor;
            let style = row_style(is_selected, is_focused);

            let section = app
                .building
                .section_name(floor.section_index)
                .map(|name| format!(" [{name}]"))
                .unwrap_or_default();

            let content = Line::from(vec![
                Span::styled(floor.label.clone(), style),
                Span::styled(section, Style::default().fg(BRAND_MUTED)),
                Span::styled(
                    format!(" {}", floor_kind_label(floor.kind)),
                    Style::default().fg(BRAND_MUTED),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let title = format!(" Floors ({}) ", app.building.floors.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_spaces(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Spaces;
    let spaces = app.current_floor().map(|f| f.spaces.as_slice()).unwrap_or(&[]);

    let items: Vec<ListItem> = spaces
        .iter()
        .enumerate()
        .map(|(i, space)| {
            let is_selected = i == app.selected_space;
            let style = row_style(is_selected, is_focused);

            let content = Line::from(vec![
                Span::styled(space.identifier.clone(), style),
                Span::styled(
                    format!(" {}", space_kind_label(space.kind)),
                    Style::default().fg(BRAND_MUTED),
                ),
                Span::styled(
                    format!(" ({})", space.rooms.len()),
                    Style::default().fg(BRAND_MUTED),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let title = format!(" Spaces ({}) ", spaces.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_rooms(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Rooms;
    let store = app.current_store();
    let rooms = app.current_space().map(|s| s.rooms.as_slice()).unwrap_or(&[]);

    let mut checked = 0;
    let items: Vec<ListItem> = rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            let is_selected = i == app.selected_room;
            let style = row_style(is_selected, is_focused);

            let is_checked = store.get(room);
            if is_checked {
                checked += 1;
            }
            let checkbox = if is_checked { "[x] " } else { "[ ] " };
            let checkbox_style = if is_checked {
                Style::default().fg(CHECKED_COLOR)
            } else {
                Style::default().fg(BRAND_MUTED)
            };

            let volume = room
                .volume
                .map(|v| format!(" {v:.1} м³"))
                .unwrap_or_default();

            let content = Line::from(vec![
                Span::styled(checkbox, checkbox_style),
                Span::styled(room.name.clone(), style),
                Span::styled(volume, Style::default().fg(BRAND_MUTED)),
            ]);
            ListItem::new(content)
        })
        .collect();

    let title = format!(" Rooms ({checked}/{} checked) ", rooms.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(status) => format!(" {status} "),
        None => {
            " ←→ Panel | ↑↓ Move | Space Toggle | Tab Subsystem | Enter Details | \
             c Copy floor | s Save | r Reload | q Quit "
                .to_string()
        }
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_room_detail(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let mut lines: Vec<Line> = Vec::new();
    if let (Some(floor), Some(space), Some(room)) =
        (app.current_floor(), app.current_space(), app.current_room())
    {
        lines.push(Line::from(vec![
            Span::styled("Room: ", HEADER_STYLE),
            Span::raw(room.name.clone()),
        ]));
        lines.push(Line::from(format!(
            "Location: {} / {}",
            floor.label, space.identifier
        )));
        lines.push(Line::from(format!(
            "Volume: {}",
            room.volume.map_or("-".to_string(), |v| format!("{v:.1} м³"))
        )));
        lines.push(Line::from(format!(
            "External walls: {}",
            room.external_walls
                .map_or("-".to_string(), |w| w.to_string())
        )));
        if let Some(origin) = room.original_room_id {
            lines.push(Line::from(format!("Copied from room #{origin}")));
        }
        lines.push(Line::from(""));
        for (subsystem, store) in Subsystem::ALL.iter().zip(&app.stores) {
            let mark = if store.get(room) { "[x]" } else { "[ ]" };
            lines.push(Line::from(format!("{mark} {}", subsystem.label())));
        }
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .title(" Room Detail ")
            .borders(Borders::ALL),
    );
    frame.render_widget(detail, chunks[1]);

    let footer = Paragraph::new(" Esc Back | q Quit ")
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

fn floor_kind_label(kind: FloorType) -> &'static str {
    match kind {
        FloorType::Residential => "residential",
        FloorType::Office => "office",
        FloorType::Public => "public",
        FloorType::Mixed => "mixed",
        FloorType::Street => "street",
    }
}

fn space_kind_label(kind: SpaceType) -> &'static str {
    match kind {
        SpaceType::Apartment => "apartment",
        SpaceType::Office => "office",
        SpaceType::PublicSpace => "public",
        SpaceType::Outdoor => "outdoor",
        SpaceType::Technical => "technical",
    }
}
