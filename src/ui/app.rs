use crate::model::{Building, Floor, Room, Space};
use crate::ops::duplicate_floor;
use crate::select::{
    restore_selections, save_selections, AutoSelector, SelectionStore, Snapshot, Subsystem,
};
use crate::storage;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    RoomDetail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Floors,
    Spaces,
    Rooms,
}

pub struct App {
    pub building: Building,
    pub project_path: PathBuf,
    pub view: View,
    pub focus_panel: FocusPanel,
    /// Index into [`Subsystem::ALL`]; one live store per subsystem.
    pub subsystem_index: usize,
    pub stores: Vec<SelectionStore>,
    pub selector: AutoSelector,
    pub selected_floor: usize,
    pub selected_space: usize,
    pub selected_room: usize,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(mut building: Building, project_path: PathBuf) -> Self {
        // Display order: section, then position within section.
        building.floors.sort_by_key(|f| (f.section_index, f.position));

        let stores = Subsystem::ALL
            .iter()
            .map(|s| SelectionStore::new(s.kind()))
            .collect();

        let mut app = Self {
            building,
            project_path,
            view: View::Dashboard,
            focus_panel: FocusPanel::Floors,
            subsystem_index: 0,
            stores,
            selector: AutoSelector::new(),
            selected_floor: 0,
            selected_space: 0,
            selected_room: 0,
            status: None,
            should_quit: false,
        };
        app.visit_current_space();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::RoomDetail => super::dashboard::draw_room_detail(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.view {
                View::Dashboard => self.handle_dashboard_keys(key.code),
                View::RoomDetail => self.handle_detail_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Tab => self.next_subsystem(),
            KeyCode::Char(' ') => self.toggle_current_room(),
            KeyCode::Enter => self.enter_room_detail(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('c') => self.copy_current_floor(),
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn subsystem(&self) -> Subsystem {
        Subsystem::ALL[self.subsystem_index]
    }

    #[must_use]
    pub fn current_store(&self) -> &SelectionStore {
        &self.stores[self.subsystem_index]
    }

    #[must_use]
    pub fn current_floor(&self) -> Option<&Floor> {
        self.building.floors.get(self.selected_floor)
    }

    #[must_use]
    pub fn current_space(&self) -> Option<&Space> {
        self.current_floor()
            .and_then(|f| f.spaces.get(self.selected_space))
    }

    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.current_space()
            .and_then(|s| s.rooms.get(self.selected_room))
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                if self.selected_floor > 0 {
                    self.selected_floor -= 1;
                    self.selected_space = 0;
                    self.selected_room = 0;
                    self.visit_current_space();
                }
            }
            FocusPanel::Spaces => {
                if self.selected_space > 0 {
                    self.selected_space -= 1;
                    self.selected_room = 0;
                    self.visit_current_space();
                }
            }
            FocusPanel::Rooms => {
                if self.selected_room > 0 {
                    self.selected_room -= 1;
                }
            }
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                if self.selected_floor < self.building.floors.len().saturating_sub(1) {
                    self.selected_floor += 1;
                    self.selected_space = 0;
                    self.selected_room = 0;
                    self.visit_current_space();
                }
            }
            FocusPanel::Spaces => {
                let count = self.current_floor().map_or(0, |f| f.spaces.len());
                if self.selected_space < count.saturating_sub(1) {
                    self.selected_space += 1;
                    self.selected_room = 0;
                    self.visit_current_space();
                }
            }
            FocusPanel::Rooms => {
                let count = self.current_space().map_or(0, |s| s.rooms.len());
                if self.selected_room < count.saturating_sub(1) {
                    self.selected_room += 1;
                }
            }
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Rooms => self.focus_panel = FocusPanel::Spaces,
            FocusPanel::Spaces => self.focus_panel = FocusPanel::Floors,
            FocusPanel::Floors => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => self.focus_panel = FocusPanel::Spaces,
            FocusPanel::Spaces => self.focus_panel = FocusPanel::Rooms,
            FocusPanel::Rooms => {}
        }
    }

    fn next_subsystem(&mut self) {
        self.subsystem_index = (self.subsystem_index + 1) % Subsystem::ALL.len();
        self.visit_current_space();
    }

    fn enter_room_detail(&mut self) {
        if self.focus_panel == FocusPanel::Rooms && self.current_room().is_some() {
            self.view = View::RoomDetail;
        }
    }

    /// Applies default selections to the space under the cursor. A no-op
    /// for spaces already processed this session.
    fn visit_current_space(&mut self) {
        let subsystem = self.subsystem_index;
        if let Some(floor) = self.building.floors.get(self.selected_floor) {
            if let Some(space) = floor.spaces.get(self.selected_space) {
                self.selector.apply(floor, space, &mut self.stores[subsystem]);
            }
        }
    }

    fn toggle_current_room(&mut self) {
        if self.focus_panel != FocusPanel::Rooms {
            return;
        }
        let target = self
            .current_room()
            .map(|room| (room.id, self.current_store().get(room)));
        if let Some((room_id, value)) = target {
            self.stores[self.subsystem_index].set(room_id, !value);
        }
    }

    /// Commit every store into the tree, then write the project file.
    /// Commit must come first or pending checkbox state is lost.
    fn save(&mut self) {
        for store in &self.stores {
            store.commit(&mut self.building);
        }
        self.status = match storage::save_project(&self.building, &self.project_path) {
            Ok(()) => Some(format!("Saved {}", self.project_path.display())),
            Err(e) => Some(format!("Save failed: {e}")),
        };
    }

    /// Reload the project file. The new tree has new room ids, so pending
    /// selections are carried across as structural-key snapshots: save
    /// before the load, restore after.
    fn reload(&mut self) {
        let snapshots: Vec<Snapshot> = self
            .stores
            .iter()
            .map(|store| save_selections(&self.building, store))
            .collect();

        match storage::load_project(&self.project_path) {
            Ok(mut building) => {
                building.floors.sort_by_key(|f| (f.section_index, f.position));
                self.building = building;
                for (store, snapshot) in self.stores.iter_mut().zip(&snapshots) {
                    store.clear();
                    restore_selections(&self.building, store, snapshot);
                }
                self.selector.reset();
                self.selected_floor = 0;
                self.selected_space = 0;
                self.selected_room = 0;
                self.status = Some("Project reloaded".to_string());
                self.visit_current_space();
            }
            Err(e) => self.status = Some(format!("Reload failed: {e}")),
        }
    }

    fn copy_current_floor(&mut self) {
        if let Some(index) = duplicate_floor(&mut self.building, self.selected_floor) {
            let label = self.building.floors[index].label.clone();
            self.status = Some(format!("Added {label}"));
        }
    }
}
