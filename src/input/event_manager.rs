//! Event routing between the UI layer and the world
//!
//! Every raw event is offered to the UI dispatcher (hover tracking and
//! Z-ordered hit testing), then to the UI action handler (tooltips and
//! click resolution), and only reaches the world when neither claimed it
//! and no UI click sequence is in progress.

use std::collections::VecDeque;

use instant::Instant;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::event::InputEvent;
use crate::settings::{Settings, TerrainEditMode};
use crate::ui::{ElementKey, UiAction, UiManager};
use crate::world::{Layers, ScreenPoint, World, WorldPoint};

/// Cell used by the elevation benchmark
const BENCHMARK_CELL: WorldPoint = WorldPoint {
    x: 64,
    y: 64,
    z: 0,
    height: 0,
};

/// Routes raw input events and tracks transient interaction state
///
/// Created once per session; all state lives for the whole session and is
/// mutated one event at a time.
pub struct EventManager {
    pending: VecDeque<InputEvent>,

    /// Topmost element the cursor currently hovers, if any
    last_hovered: Option<ElementKey>,
    /// True strictly between a UI-claimed left button-down and its
    /// matching button-up; suppresses world input for that window
    is_handling_mouse_events: bool,

    /// Remembered from mouse motion: the hovered cell accepts placement
    placement_allowed: bool,
    panning: bool,
    /// The next left click is consumed without effect (set when a right
    /// click cancels an ongoing placement)
    skip_left_click: bool,
    /// Last left click was interpreted as a tile-info query
    tile_info_mode: bool,
    cancel_tile_selection: bool,

    pinch_center: ScreenPoint,
    click_down_coords: ScreenPoint,

    /// Cells edited during the current click sequence
    nodes_to_place: Vec<WorldPoint>,
    /// Cells the renderer should highlight under the cursor
    nodes_to_highlight: Vec<WorldPoint>,
    /// Cells the renderer should draw transparent so the highlight
    /// stays visible
    transparent_buildings: Vec<WorldPoint>,
}

impl EventManager {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            last_hovered: None,
            is_handling_mouse_events: false,
            placement_allowed: false,
            panning: false,
            skip_left_click: false,
            tile_info_mode: false,
            cancel_tile_selection: false,
            pinch_center: ScreenPoint::ZERO,
            click_down_coords: ScreenPoint::ZERO,
            nodes_to_place: Vec::new(),
            nodes_to_highlight: Vec::new(),
            transparent_buildings: Vec::new(),
        }
    }

    /// Queue one raw event for processing
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Process at most one pending event
    ///
    /// Called once per poll cycle by the host loop. Returns without side
    /// effects when the queue is empty.
    pub fn check_events(&mut self, ui: &mut UiManager, world: &mut World, settings: &mut Settings) {
        let Some(event) = self.pending.pop_front() else {
            return;
        };

        // UI first: the dispatcher tracks hover, the action handler
        // resolves clicks. A dispatcher hit must not starve the action
        // handler, so both always run; only the world is short-circuited.
        let ui_hit = self.dispatch_ui_events(ui, &event);
        let ui_handled = self.handle_ui_events(ui, settings, &event);

        if ui_hit || ui_handled || self.is_handling_mouse_events {
            return;
        }
        self.handle_world_input(ui, world, settings, &event);
    }

    /// Z-ordered hit test and hover/press forwarding
    ///
    /// Returns true iff the event landed on a visible interactive element.
    fn dispatch_ui_events(&mut self, ui: &mut UiManager, event: &InputEvent) -> bool {
        let Some(pos) = event.screen_position() else {
            return false;
        };

        let hit = ui.element_at(pos);
        let mut hovering = false;
        if let Some(key) = hit {
            hovering = ui
                .element(key)
                .is_some_and(|element| element.hover_contains(pos));

            match *event {
                InputEvent::MouseMotion { .. } => {
                    if hovering && self.last_hovered != Some(key) {
                        if let Some(previous) = self.last_hovered.take() {
                            if let Some(element) = ui.element_mut(previous) {
                                element.on_mouse_leave();
                            }
                        }
                        if let Some(element) = ui.element_mut(key) {
                            element.on_mouse_enter();
                        }
                        self.last_hovered = Some(key);
                    }
                }
                InputEvent::MouseButtonDown { .. } => {
                    if let Some(element) = ui.element_mut(key) {
                        element.on_mouse_button_down(pos);
                    }
                }
                InputEvent::MouseButtonUp { .. } => {
                    if let Some(element) = ui.element_mut(key) {
                        element.on_mouse_button_up(pos);
                    }
                }
                _ => {}
            }
        }

        // No confirmed hover anywhere: whatever was hovered before has
        // been left. This also catches elements destroyed mid-hover.
        if !hovering {
            self.clear_hover(ui);
        }

        hit.is_some()
    }

    fn clear_hover(&mut self, ui: &mut UiManager) {
        if let Some(previous) = self.last_hovered.take() {
            if let Some(element) = ui.element_mut(previous) {
                element.on_mouse_leave();
            }
        }
    }

    /// Tooltip updates and click resolution
    ///
    /// Returns true iff a left button-up was resolved against an eligible
    /// element.
    fn handle_ui_events(
        &mut self,
        ui: &mut UiManager,
        settings: &mut Settings,
        event: &InputEvent,
    ) -> bool {
        let mut handled = false;
        let clicked = event.screen_position().and_then(|pos| ui.element_at(pos));

        match *event {
            InputEvent::MouseMotion { pos } => {
                let tooltip_text = clicked
                    .and_then(|key| ui.element(key))
                    .map(|element| element.tooltip_text.clone())
                    .filter(|text| !text.is_empty());
                match tooltip_text {
                    Some(text) => {
                        ui.tooltip.set_text(&text);
                        let size = ui.tooltip.size();
                        // horizontal center and bottom edge at the cursor
                        ui.tooltip
                            .set_position(ScreenPoint::new(pos.x - size.x / 2, pos.y - size.y));
                        ui.tooltip.set_visibility(true);
                        ui.tooltip.start_timer();
                    }
                    None => ui.tooltip.set_visibility(false),
                }
            }
            InputEvent::MouseButtonDown { pos, button } => {
                if button == MouseButton::Left && clicked.is_some() {
                    // claim the rest of this click sequence for the UI
                    self.is_handling_mouse_events = true;
                    self.click_down_coords = pos;
                }
            }
            InputEvent::MouseButtonUp { pos, button } => {
                self.is_handling_mouse_events = false;

                if button == MouseButton::Left {
                    if let Some(key) = clicked {
                        match ui.element(key).and_then(|element| element.action) {
                            Some(UiAction::ToggleRaiseMode) => {
                                toggle_terrain_mode(settings, TerrainEditMode::Raise);
                            }
                            Some(UiAction::ToggleLowerMode) => {
                                toggle_terrain_mode(settings, TerrainEditMode::Lower);
                            }
                            Some(UiAction::ComboBox) => {
                                let row =
                                    ui.element(key).and_then(|element| element.clicked_row_at(pos));
                                log::debug!("combo box clicked, row {:?}", row);
                            }
                            // unknown actions are absorbed without effect
                            _ => {}
                        }
                        handled = true;
                    }
                }
            }
            _ => {}
        }

        handled
    }

    /// Translate an unclaimed event into world commands
    fn handle_world_input(
        &mut self,
        ui: &mut UiManager,
        world: &mut World,
        settings: &Settings,
        event: &InputEvent,
    ) {
        match *event {
            InputEvent::Quit => world.request_quit(),

            InputEvent::KeyDown(code) => self.handle_key(ui, world, settings, code),

            InputEvent::MouseMotion { pos } => {
                let coords = world.screen_to_iso(pos);
                self.placement_allowed = world.is_point_within_boundaries(coords);
                if self.placement_allowed {
                    self.nodes_to_highlight = vec![coords];
                    self.transparent_buildings = world.cells_obscuring(coords);
                } else {
                    self.nodes_to_highlight.clear();
                    self.transparent_buildings.clear();
                }
                if self.panning {
                    world.center_screen_on_point(coords);
                }
            }

            InputEvent::MouseButtonDown { pos, button } => match button {
                MouseButton::Left => {
                    self.click_down_coords = pos;
                    let coords = world.screen_to_iso(pos);
                    if self.skip_left_click {
                        self.skip_left_click = false;
                    } else if world.is_point_within_boundaries(coords) {
                        match settings.terrain_edit_mode {
                            TerrainEditMode::Raise => {
                                self.tile_info_mode = false;
                                world.increase_height_of_cell(coords, settings.max_elevation_height);
                                self.nodes_to_place.push(coords);
                            }
                            TerrainEditMode::Lower => {
                                self.tile_info_mode = false;
                                world.decrease_height_of_cell(coords);
                                self.nodes_to_place.push(coords);
                            }
                            TerrainEditMode::Off => {
                                self.tile_info_mode = true;
                                log::info!("clicked - iso coords: {}, {}", coords.x, coords.y);
                            }
                        }
                    }
                }
                MouseButton::Right => {
                    self.click_down_coords = pos;
                    if !self.nodes_to_place.is_empty() {
                        // right click cancels the placement in progress
                        self.cancel_tile_selection = true;
                        self.skip_left_click = true;
                        self.nodes_to_place.clear();
                        self.nodes_to_highlight.clear();
                        log::debug!("tile selection cancelled");
                    } else {
                        self.pinch_center = pos;
                        self.panning = true;
                        world.center_screen_on_point(world.screen_to_iso(pos));
                    }
                }
                _ => {}
            },

            InputEvent::MouseButtonUp { button, .. } => match button {
                MouseButton::Left => self.nodes_to_place.clear(),
                MouseButton::Right => {
                    self.panning = false;
                    self.cancel_tile_selection = false;
                }
                _ => {}
            },

            InputEvent::MouseWheel { delta } => {
                if delta > 0.0 {
                    world.increase_zoom_level();
                } else if delta < 0.0 {
                    world.decrease_zoom_level();
                }
            }
        }
    }

    fn handle_key(
        &mut self,
        ui: &mut UiManager,
        world: &mut World,
        settings: &Settings,
        code: KeyCode,
    ) {
        match code {
            KeyCode::Escape => ui.toggle_group_visibility("PauseMenu"),
            KeyCode::Digit0 => world.toggle_layer(Layers::GRID),
            KeyCode::Digit1 => world.toggle_layer(Layers::FLOOR),
            KeyCode::Digit2 => world.toggle_layer(Layers::BUILDINGS),
            KeyCode::Digit3 => world.toggle_layer(Layers::SELECTION),
            KeyCode::F11 => ui.toggle_debug_menu(),
            KeyCode::KeyF => world.toggle_fullscreen(),
            KeyCode::KeyB => run_elevation_benchmark(world, settings),
            _ => {}
        }
    }

    pub fn last_hovered(&self) -> Option<ElementKey> {
        self.last_hovered
    }

    pub fn is_handling_mouse_events(&self) -> bool {
        self.is_handling_mouse_events
    }

    pub fn is_placement_allowed(&self) -> bool {
        self.placement_allowed
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn is_tile_info_mode(&self) -> bool {
        self.tile_info_mode
    }

    pub fn is_tile_selection_cancelled(&self) -> bool {
        self.cancel_tile_selection
    }

    pub fn pinch_center(&self) -> ScreenPoint {
        self.pinch_center
    }

    pub fn click_down_coords(&self) -> ScreenPoint {
        self.click_down_coords
    }

    pub fn nodes_to_place(&self) -> &[WorldPoint] {
        &self.nodes_to_place
    }

    pub fn nodes_to_highlight(&self) -> &[WorldPoint] {
        &self.nodes_to_highlight
    }

    pub fn transparent_buildings(&self) -> &[WorldPoint] {
        &self.transparent_buildings
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Repeatedly raise one cell to the configured maximum height, logging the
/// total elapsed time
///
/// A built-in diagnostic, reachable with the B key or `--benchmark`.
pub fn run_elevation_benchmark(world: &mut World, settings: &Settings) {
    log::info!("starting elevation benchmark");
    let start = Instant::now();
    for _ in 0..=settings.max_elevation_height {
        world.increase_height_of_cell(BENCHMARK_CELL, settings.max_elevation_height);
    }
    log::info!(
        "done, elevation took {}ms",
        start.elapsed().as_millis()
    );
}

fn toggle_terrain_mode(settings: &mut Settings, mode: TerrainEditMode) {
    settings.terrain_edit_mode = if settings.terrain_edit_mode == mode {
        TerrainEditMode::Off
    } else {
        mode
    };
    log::debug!("terrain edit mode: {:?}", settings.terrain_edit_mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Rect, UiElement};

    struct Fixture {
        manager: EventManager,
        ui: UiManager,
        world: World,
        settings: Settings,
    }

    impl Fixture {
        fn new() -> Self {
            let settings = Settings::default();
            Self {
                manager: EventManager::new(),
                ui: UiManager::new(),
                world: World::new(&settings),
                settings,
            }
        }

        fn feed(&mut self, event: InputEvent) {
            self.manager.push_event(event);
            self.manager
                .check_events(&mut self.ui, &mut self.world, &mut self.settings);
        }

        fn add_button(&mut self, rect: Rect, action: UiAction) -> ElementKey {
            self.ui
                .add_element(UiElement::new("button", rect).with_action(action))
        }

        /// Screen position of a map cell for synthesizing world clicks
        fn screen_of(&self, x: i32, y: i32) -> ScreenPoint {
            self.world.camera.iso_to_screen(WorldPoint::new(x, y))
        }
    }

    fn motion(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseMotion {
            pos: ScreenPoint::new(x, y),
        }
    }

    fn down(pos: ScreenPoint, button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { pos, button }
    }

    fn up(pos: ScreenPoint, button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp { pos, button }
    }

    fn click(fixture: &mut Fixture, pos: ScreenPoint) {
        fixture.feed(down(pos, MouseButton::Left));
        fixture.feed(up(pos, MouseButton::Left));
    }

    #[test]
    fn test_empty_queue_is_a_noop() {
        let mut f = Fixture::new();
        f.manager
            .check_events(&mut f.ui, &mut f.world, &mut f.settings);
        assert!(f.manager.last_hovered().is_none());
        assert!(!f.world.quit_requested());
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut f = Fixture::new();
        let key = f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(0));

        f.feed(motion(10, 10));
        assert_eq!(f.manager.last_hovered(), Some(key));
        assert!(f.ui.element(key).unwrap().is_hovered());

        f.feed(motion(300, 300));
        assert!(f.manager.last_hovered().is_none());
        assert!(!f.ui.element(key).unwrap().is_hovered());
    }

    #[test]
    fn test_at_most_one_element_hovered() {
        let mut f = Fixture::new();
        let a = f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(0));
        let b = f.add_button(Rect::new(60, 0, 50, 50), UiAction::Other(1));

        f.feed(motion(10, 10));
        f.feed(motion(70, 10));

        assert_eq!(f.manager.last_hovered(), Some(b));
        assert!(!f.ui.element(a).unwrap().is_hovered());
        assert!(f.ui.element(b).unwrap().is_hovered());
    }

    #[test]
    fn test_topmost_element_receives_button_events() {
        let mut f = Fixture::new();
        let bottom = f.add_button(Rect::new(0, 0, 100, 100), UiAction::Other(0));
        let top = f.add_button(Rect::new(0, 0, 100, 100), UiAction::Other(1));

        f.feed(down(ScreenPoint::new(50, 50), MouseButton::Left));
        assert!(f.ui.element(top).unwrap().is_pressed());
        assert!(!f.ui.element(bottom).unwrap().is_pressed());
    }

    #[test]
    fn test_removed_element_leaves_no_dangling_hover() {
        let mut f = Fixture::new();
        let key = f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(0));

        f.feed(motion(10, 10));
        assert_eq!(f.manager.last_hovered(), Some(key));

        f.ui.remove_element(key);
        f.feed(motion(12, 12));
        assert!(f.manager.last_hovered().is_none());
    }

    #[test]
    fn test_click_sequence_claims_input() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(0));

        f.feed(down(ScreenPoint::new(10, 10), MouseButton::Left));
        assert!(f.manager.is_handling_mouse_events());

        f.feed(up(ScreenPoint::new(10, 10), MouseButton::Left));
        assert!(!f.manager.is_handling_mouse_events());
    }

    #[test]
    fn test_world_suppressed_during_ui_click_sequence() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(0));
        f.settings.terrain_edit_mode = TerrainEditMode::Raise;

        f.feed(down(ScreenPoint::new(10, 10), MouseButton::Left));
        assert!(f.manager.is_handling_mouse_events());

        // none of these may reach the world while the UI owns the stream
        f.feed(InputEvent::MouseWheel { delta: 1.0 });
        assert_eq!(f.world.camera.zoom_level(), 1.0);
        f.feed(InputEvent::KeyDown(KeyCode::Digit0));
        assert!(f.world.is_layer_visible(Layers::GRID));
        f.feed(motion(500, 500));
        assert!(f.manager.nodes_to_highlight().is_empty());

        f.feed(up(ScreenPoint::new(10, 10), MouseButton::Left));
        assert!(!f.manager.is_handling_mouse_events());
    }

    #[test]
    fn test_button_up_off_element_clears_claim() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::ToggleRaiseMode);

        f.feed(down(ScreenPoint::new(10, 10), MouseButton::Left));
        f.feed(up(ScreenPoint::new(400, 400), MouseButton::Left));

        assert!(!f.manager.is_handling_mouse_events());
        // the release happened off the element, so no action resolved
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Off);
    }

    #[test]
    fn test_toggle_raise_twice_is_idempotent() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::ToggleRaiseMode);
        let pos = ScreenPoint::new(10, 10);

        click(&mut f, pos);
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Raise);
        click(&mut f, pos);
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Off);
    }

    #[test]
    fn test_raise_then_lower_last_writer_wins() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::ToggleRaiseMode);
        f.add_button(Rect::new(60, 0, 50, 50), UiAction::ToggleLowerMode);

        click(&mut f, ScreenPoint::new(10, 10));
        click(&mut f, ScreenPoint::new(70, 10));
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Lower);
    }

    #[test]
    fn test_unknown_action_is_absorbed() {
        let mut f = Fixture::new();
        f.add_button(Rect::new(0, 0, 50, 50), UiAction::Other(42));

        click(&mut f, ScreenPoint::new(10, 10));
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Off);
    }

    #[test]
    fn test_left_click_raises_cell_in_raise_mode() {
        let mut f = Fixture::new();
        f.settings.terrain_edit_mode = TerrainEditMode::Raise;
        let cell = WorldPoint::new(64, 64);
        let pos = f.screen_of(64, 64);

        f.feed(down(pos, MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 1);
        assert_eq!(f.manager.nodes_to_place(), &[cell]);

        f.feed(up(pos, MouseButton::Left));
        assert!(f.manager.nodes_to_place().is_empty());
    }

    #[test]
    fn test_left_click_lowers_cell_in_lower_mode() {
        let mut f = Fixture::new();
        let cell = WorldPoint::new(64, 64);
        f.world.increase_height_of_cell(cell, 32);
        f.world.increase_height_of_cell(cell, 32);
        f.settings.terrain_edit_mode = TerrainEditMode::Lower;

        f.feed(down(f.screen_of(64, 64), MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 1);
    }

    #[test]
    fn test_left_click_with_mode_off_only_logs() {
        let mut f = Fixture::new();
        let cell = WorldPoint::new(64, 64);

        f.feed(down(f.screen_of(64, 64), MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 0);
        assert!(f.manager.is_tile_info_mode());
        assert!(f.manager.nodes_to_place().is_empty());
    }

    #[test]
    fn test_right_click_centers_camera() {
        let mut f = Fixture::new();
        f.settings.terrain_edit_mode = TerrainEditMode::Raise;
        let pos = ScreenPoint::new(200, 300);
        let expected = f.world.screen_to_iso(pos);

        f.feed(down(pos, MouseButton::Right));
        assert_eq!(f.world.camera.center(), expected);
        assert!(f.manager.is_panning());

        f.feed(up(pos, MouseButton::Right));
        assert!(!f.manager.is_panning());
    }

    #[test]
    fn test_panning_follows_motion() {
        let mut f = Fixture::new();
        f.feed(down(ScreenPoint::new(640, 360), MouseButton::Right));

        let pos = ScreenPoint::new(700, 400);
        let expected = f.world.screen_to_iso(pos);
        f.feed(motion(pos.x, pos.y));
        assert_eq!(f.world.camera.center(), expected);
    }

    #[test]
    fn test_mouse_wheel_zoom() {
        let mut f = Fixture::new();

        f.feed(InputEvent::MouseWheel { delta: 1.0 });
        assert_eq!(f.world.camera.zoom_level(), 1.25);
        f.feed(InputEvent::MouseWheel { delta: -1.0 });
        assert_eq!(f.world.camera.zoom_level(), 1.0);
        f.feed(InputEvent::MouseWheel { delta: 0.0 });
        assert_eq!(f.world.camera.zoom_level(), 1.0);
    }

    #[test]
    fn test_motion_updates_highlight_bookkeeping() {
        let mut f = Fixture::new();
        let pos = f.screen_of(30, 40);

        f.feed(motion(pos.x, pos.y));
        assert!(f.manager.is_placement_allowed());
        assert_eq!(f.manager.nodes_to_highlight(), &[WorldPoint::new(30, 40)]);

        let outside = f.screen_of(-20, -20);
        f.feed(motion(outside.x, outside.y));
        assert!(!f.manager.is_placement_allowed());
        assert!(f.manager.nodes_to_highlight().is_empty());
    }

    #[test]
    fn test_right_click_cancels_placement() {
        let mut f = Fixture::new();
        f.settings.terrain_edit_mode = TerrainEditMode::Raise;
        let cell = WorldPoint::new(64, 64);
        let pos = f.screen_of(64, 64);

        f.feed(down(pos, MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 1);

        f.feed(down(pos, MouseButton::Right));
        assert!(f.manager.nodes_to_place().is_empty());
        assert!(f.manager.is_tile_selection_cancelled());
        f.feed(up(pos, MouseButton::Right));
        assert!(!f.manager.is_tile_selection_cancelled());

        // the cancelled sequence consumes the next left click
        f.feed(down(pos, MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 1);
        f.feed(down(pos, MouseButton::Left));
        assert_eq!(f.world.map.elevation(cell), 2);
    }

    #[test]
    fn test_quit_event_requests_termination() {
        let mut f = Fixture::new();
        f.feed(InputEvent::Quit);
        assert!(f.world.quit_requested());
    }

    #[test]
    fn test_escape_toggles_pause_menu_group() {
        let mut f = Fixture::new();
        let key = f.ui.add_element(
            UiElement::new("pause-panel", Rect::new(400, 200, 200, 300))
                .with_group("PauseMenu")
                .with_visibility(false),
        );

        f.feed(InputEvent::KeyDown(KeyCode::Escape));
        assert!(f.ui.element(key).unwrap().visible);
        f.feed(InputEvent::KeyDown(KeyCode::Escape));
        assert!(!f.ui.element(key).unwrap().visible);
    }

    #[test]
    fn test_layer_toggle_keys() {
        let mut f = Fixture::new();

        f.feed(InputEvent::KeyDown(KeyCode::Digit0));
        assert!(!f.world.is_layer_visible(Layers::GRID));
        f.feed(InputEvent::KeyDown(KeyCode::Digit1));
        assert!(!f.world.is_layer_visible(Layers::FLOOR));
        f.feed(InputEvent::KeyDown(KeyCode::Digit2));
        assert!(!f.world.is_layer_visible(Layers::BUILDINGS));
        f.feed(InputEvent::KeyDown(KeyCode::Digit3));
        assert!(!f.world.is_layer_visible(Layers::SELECTION));
    }

    #[test]
    fn test_debug_menu_and_fullscreen_keys() {
        let mut f = Fixture::new();

        f.feed(InputEvent::KeyDown(KeyCode::F11));
        assert!(f.ui.is_debug_menu_visible());
        f.feed(InputEvent::KeyDown(KeyCode::KeyF));
        assert!(f.world.is_fullscreen());
    }

    #[test]
    fn test_elevation_benchmark_raises_to_max() {
        let mut f = Fixture::new();
        f.settings.max_elevation_height = 8;

        f.feed(InputEvent::KeyDown(KeyCode::KeyB));
        assert_eq!(f.world.map.elevation(WorldPoint::new(64, 64)), 8);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut f = Fixture::new();
        f.feed(InputEvent::KeyDown(KeyCode::KeyQ));
        assert!(!f.world.quit_requested());
        assert_eq!(f.world.camera.zoom_level(), 1.0);
    }

    #[test]
    fn test_tooltip_shown_with_cursor_anchor() {
        let mut f = Fixture::new();
        f.ui.add_element(
            UiElement::new("raise", Rect::new(100, 100, 40, 20))
                .with_action(UiAction::ToggleRaiseMode)
                .with_tooltip("Raise terrain"),
        );

        f.feed(motion(110, 110));
        assert!(f.ui.tooltip.is_visible());
        assert_eq!(f.ui.tooltip.text(), "Raise terrain");
        let size = f.ui.tooltip.size();
        assert_eq!(
            f.ui.tooltip.position(),
            ScreenPoint::new(110 - size.x / 2, 110 - size.y)
        );
    }

    #[test]
    fn test_tooltip_hidden_without_text_or_element() {
        let mut f = Fixture::new();
        f.ui.add_element(
            UiElement::new("tooltipped", Rect::new(0, 0, 50, 50))
                .with_action(UiAction::Other(0))
                .with_tooltip("hello"),
        );
        f.add_button(Rect::new(60, 0, 50, 50), UiAction::Other(1));

        f.feed(motion(10, 10));
        assert!(f.ui.tooltip.is_visible());

        // element without tooltip text hides it
        f.feed(motion(70, 10));
        assert!(!f.ui.tooltip.is_visible());

        f.feed(motion(10, 10));
        assert!(f.ui.tooltip.is_visible());

        // no element at all hides it too
        f.feed(motion(500, 500));
        assert!(!f.ui.tooltip.is_visible());
    }

    #[test]
    fn test_combo_box_click_is_handled_without_state_change() {
        let mut f = Fixture::new();
        let rows = vec!["small".to_string(), "medium".to_string()];
        f.ui.add_element(UiElement::combo_box(
            "map-size",
            Rect::new(0, 0, 100, 60),
            rows,
            20,
        ));

        click(&mut f, ScreenPoint::new(10, 25));
        assert_eq!(f.settings.terrain_edit_mode, TerrainEditMode::Off);
        assert_eq!(f.world.camera.zoom_level(), 1.0);
    }
}
