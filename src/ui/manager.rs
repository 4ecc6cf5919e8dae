//! UI element registry with Z-ordered hit testing

use slotmap::{new_key_type, SlotMap};

use super::element::UiElement;
use super::tooltip::Tooltip;
use crate::world::ScreenPoint;

new_key_type! {
    /// Generation-checked handle to a registered element
    ///
    /// Keys of removed elements never resolve again, so holding one across
    /// element destruction is safe.
    pub struct ElementKey;
}

/// Ordered registry of interactive UI elements
///
/// Draw order doubles as Z-order: the last element added is topmost and
/// wins hit tests.
pub struct UiManager {
    elements: SlotMap<ElementKey, UiElement>,
    draw_order: Vec<ElementKey>,
    pub tooltip: Tooltip,
    debug_menu_visible: bool,
}

impl UiManager {
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
            draw_order: Vec::new(),
            tooltip: Tooltip::new(),
            debug_menu_visible: false,
        }
    }

    /// Register an element on top of everything added before it
    pub fn add_element(&mut self, element: UiElement) -> ElementKey {
        let key = self.elements.insert(element);
        self.draw_order.push(key);
        key
    }

    pub fn remove_element(&mut self, key: ElementKey) {
        self.elements.remove(key);
        self.draw_order.retain(|&k| k != key);
    }

    pub fn element(&self, key: ElementKey) -> Option<&UiElement> {
        self.elements.get(key)
    }

    pub fn element_mut(&mut self, key: ElementKey) -> Option<&mut UiElement> {
        self.elements.get_mut(key)
    }

    /// The single authoritative hit test
    ///
    /// Returns the topmost element that is visible, interactive and whose
    /// bounds contain `point`. Elements underneath never receive the event
    /// even if also hit.
    pub fn element_at(&self, point: ScreenPoint) -> Option<ElementKey> {
        self.draw_order.iter().rev().copied().find(|&key| {
            self.elements.get(key).is_some_and(|element| {
                element.visible && element.action.is_some() && element.bounds_contain(point)
            })
        })
    }

    /// Flip visibility of every element belonging to `group`
    pub fn toggle_group_visibility(&mut self, group: &str) {
        let mut toggled = 0;
        for element in self.elements.values_mut() {
            if element.group.as_deref() == Some(group) {
                element.visible = !element.visible;
                toggled += 1;
            }
        }
        log::debug!("toggled visibility of {} elements in group {}", toggled, group);
    }

    pub fn toggle_debug_menu(&mut self) {
        self.debug_menu_visible = !self.debug_menu_visible;
        log::debug!("debug menu visible: {}", self.debug_menu_visible);
    }

    pub fn is_debug_menu_visible(&self) -> bool {
        self.debug_menu_visible
    }
}

impl Default for UiManager {
    fn default() -> Self {
        Self::new()
    }
}
