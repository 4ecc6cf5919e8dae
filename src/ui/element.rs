//! Interactive UI elements: bounds, visibility, actions and hover state

use crate::world::ScreenPoint;

/// Axis-aligned rectangle in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

/// What clicking an element does
///
/// `Other` carries an unrecognized action id; those clicks are absorbed
/// without effect so newer UI layouts keep working against an older core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleRaiseMode,
    ToggleLowerMode,
    ComboBox,
    Other(i32),
}

/// Element shape, for hit-testing beyond the plain bounding box
#[derive(Clone, Debug, Default)]
pub enum UiElementKind {
    #[default]
    Button,
    ComboBox {
        rows: Vec<String>,
        row_height: i32,
    },
}

/// A single interactive element in the UI registry
#[derive(Clone, Debug)]
pub struct UiElement {
    pub id: String,
    pub rect: Rect,
    pub visible: bool,
    /// None marks a purely decorative element that never receives input
    pub action: Option<UiAction>,
    pub tooltip_text: String,
    /// Group name for bulk visibility toggling ("PauseMenu")
    pub group: Option<String>,
    pub kind: UiElementKind,
    hovered: bool,
    pressed: bool,
}

impl UiElement {
    pub fn new(id: &str, rect: Rect) -> Self {
        Self {
            id: id.to_string(),
            rect,
            visible: true,
            action: None,
            tooltip_text: String::new(),
            group: None,
            kind: UiElementKind::Button,
            hovered: false,
            pressed: false,
        }
    }

    pub fn with_action(mut self, action: UiAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_tooltip(mut self, text: &str) -> Self {
        self.tooltip_text = text.to_string();
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn combo_box(id: &str, rect: Rect, rows: Vec<String>, row_height: i32) -> Self {
        let mut element = Self::new(id, rect).with_action(UiAction::ComboBox);
        element.kind = UiElementKind::ComboBox { rows, row_height };
        element
    }

    pub fn bounds_contain(&self, point: ScreenPoint) -> bool {
        self.rect.contains(point)
    }

    /// Finer-grained hover test than plain bounds containment
    ///
    /// A combo box counts as hovered only while the cursor is over an
    /// actual row, not over trailing empty space in its bounding box.
    pub fn hover_contains(&self, point: ScreenPoint) -> bool {
        if !self.rect.contains(point) {
            return false;
        }
        match &self.kind {
            UiElementKind::Button => true,
            UiElementKind::ComboBox { rows, row_height } => {
                let row = (point.y - self.rect.y) / row_height;
                (row as usize) < rows.len()
            }
        }
    }

    /// Combo-box row under `point`, if this element has rows there
    pub fn clicked_row_at(&self, point: ScreenPoint) -> Option<usize> {
        match &self.kind {
            UiElementKind::Button => None,
            UiElementKind::ComboBox { rows, row_height } => {
                if !self.rect.contains(point) {
                    return None;
                }
                let row = ((point.y - self.rect.y) / row_height) as usize;
                (row < rows.len()).then_some(row)
            }
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn on_mouse_enter(&mut self) {
        self.hovered = true;
        log::trace!("hover enter: {}", self.id);
    }

    pub fn on_mouse_leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
        log::trace!("hover leave: {}", self.id);
    }

    pub fn on_mouse_button_down(&mut self, point: ScreenPoint) {
        self.pressed = true;
        log::trace!("button down on {} at ({}, {})", self.id, point.x, point.y);
    }

    pub fn on_mouse_button_up(&mut self, point: ScreenPoint) {
        self.pressed = false;
        log::trace!("button up on {} at ({}, {})", self.id, point.x, point.y);
    }
}
