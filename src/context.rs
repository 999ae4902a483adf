//! Application Context
//!
//! Holds the list controller and the signals the view renders from,
//! provided to all components via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Effect, Intent, Projection, TodoController, TodoId};

use crate::commands::{self, BrowserStore};

pub type Controller = TodoController<BrowserStore>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller is not reactive itself; each dispatch republishes its projection
    controller: StoredValue<Controller, LocalStorage>,
    /// Display state from the last mutation - read
    pub projection: ReadSignal<Projection>,
    /// Display state from the last mutation - write
    set_projection: WriteSignal<Projection>,
    /// New-todo input text - read
    pub new_text: ReadSignal<String>,
    /// New-todo input text - write
    set_new_text: WriteSignal<String>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        let (projection, set_projection) = signal(controller.projection().clone());
        let (new_text, set_new_text) = signal(String::new());
        Self {
            controller: StoredValue::new_local(controller),
            projection,
            set_projection,
            new_text,
            set_new_text,
        }
    }

    /// Run one intent through the controller, publish the new projection
    /// and carry out the returned effect
    pub fn dispatch(&self, intent: Intent) {
        let Some((effect, projection)) = self.controller.try_update_value(|c| {
            let effect = c.dispatch(intent);
            (effect, c.projection().clone())
        }) else {
            return;
        };

        if self.projection.with_untracked(|current| current != &projection) {
            self.set_projection.set(projection);
        }
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    /// Delete `id` once the removal animation has played. The intent is
    /// resolved when the timer fires, so a todo removed in the meantime
    /// is left alone.
    pub fn remove_later(&self, id: TodoId) {
        let ctx = *self;
        let delay = self
            .controller
            .with_value(|c| c.config().removal_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            ctx.dispatch(Intent::Delete(id));
        });
    }

    pub fn set_new_text(&self, text: String) {
        self.set_new_text.set(text);
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::ClearInput => self.set_new_text.set(String::new()),
            Effect::FocusEditor(id) => {
                // after the edit field has been rendered
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    if let Err(e) = commands::focus_edit_input(id) {
                        log::debug!("{}", e);
                    }
                });
            }
            Effect::Download { file_name, contents } => {
                if let Err(e) = commands::download_file(&file_name, &contents, "application/json") {
                    log::error!("download of {} failed: {}", file_name, e);
                }
            }
        }
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
