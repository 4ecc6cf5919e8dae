//! Application shell: window, event loop and raw-event translation

use anyhow::Result;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::input::{EventManager, InputEvent};
use crate::settings::Settings;
use crate::ui::{Rect, UiAction, UiElement, UiManager};
use crate::world::{ScreenPoint, World};

pub struct App {
    window: Window,
    event_loop: EventLoop<()>,
    event_manager: EventManager,
    ui: UiManager,
    world: World,
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title("Isopolis")
            .with_inner_size(LogicalSize::new(
                settings.screen_width,
                settings.screen_height,
            ))
            .build(&event_loop)?;

        let world = World::new(&settings);
        Ok(Self {
            window,
            event_loop,
            event_manager: EventManager::new(),
            ui: build_default_ui(),
            world,
            settings,
        })
    }

    pub fn run(self) -> Result<()> {
        let Self {
            window,
            event_loop,
            mut event_manager,
            mut ui,
            mut world,
            mut settings,
        } = self;

        let mut cursor_pos = ScreenPoint::ZERO;

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => {
                    event_manager.push_event(InputEvent::Quit);
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if let PhysicalKey::Code(code) = key_event.physical_key {
                        if key_event.state == ElementState::Pressed && !key_event.repeat {
                            event_manager.push_event(InputEvent::KeyDown(code));
                        }
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_pos = ScreenPoint::new(position.x as i32, position.y as i32);
                    event_manager.push_event(InputEvent::MouseMotion { pos: cursor_pos });
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let event = match state {
                        ElementState::Pressed => InputEvent::MouseButtonDown {
                            pos: cursor_pos,
                            button,
                        },
                        ElementState::Released => InputEvent::MouseButtonUp {
                            pos: cursor_pos,
                            button,
                        },
                    };
                    event_manager.push_event(event);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let delta = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                    };
                    event_manager.push_event(InputEvent::MouseWheel { delta });
                }
                _ => {}
            }

            event_manager.check_events(&mut ui, &mut world, &mut settings);

            // apply session flags the event core may have changed
            let fullscreen_now = window.fullscreen().is_some();
            if world.is_fullscreen() != fullscreen_now {
                window.set_fullscreen(
                    world
                        .is_fullscreen()
                        .then(|| Fullscreen::Borderless(None)),
                );
            }
            if world.quit_requested() {
                elwt.exit();
            }
        })?;

        Ok(())
    }
}

/// The in-game UI layout: terrain-edit toggles, a map-size combo box and
/// the initially hidden pause menu
fn build_default_ui() -> UiManager {
    let mut ui = UiManager::new();
    ui.add_element(
        UiElement::new("terrain-raise", Rect::new(16, 16, 48, 48))
            .with_action(UiAction::ToggleRaiseMode)
            .with_tooltip("Raise terrain"),
    );
    ui.add_element(
        UiElement::new("terrain-lower", Rect::new(72, 16, 48, 48))
            .with_action(UiAction::ToggleLowerMode)
            .with_tooltip("Lower terrain"),
    );
    ui.add_element(UiElement::combo_box(
        "map-size",
        Rect::new(128, 16, 120, 60),
        vec!["64 x 64".into(), "128 x 128".into(), "256 x 256".into()],
        20,
    ));
    ui.add_element(
        UiElement::new("pause-menu", Rect::new(440, 160, 400, 400))
            .with_action(UiAction::Other(1))
            .with_group("PauseMenu")
            .with_visibility(false),
    );
    ui
}
