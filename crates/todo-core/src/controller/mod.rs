//! List Controller
//!
//! Owns the todo collection and the transient session state (filter and
//! the todo being edited). Every mutation persists the whole collection
//! and recomputes the `Projection`.


use crate::clock::Clock;
use crate::config::TodoConfig;
use crate::domain::{Filter, Todo, TodoId, MAX_TODO_ID};
use crate::export::ExportDocument;
use crate::intent::{Effect, Intent};
use crate::projection::Projection;
use crate::store::{load_snapshot, save_snapshot, KeyValueStore};

pub struct TodoController<S> {
    store: S,
    clock: Box<dyn Clock>,
    config: TodoConfig,
    todos: Vec<Todo>,
    filter: Filter,
    editing: Option<TodoId>,
    /// Largest id handed out or loaded so far
    last_id: u64,
    projection: Projection,
}

impl<S: KeyValueStore> TodoController<S> {
    /// Load the persisted snapshot (or start empty) and compute the first projection
    pub fn initialize(store: S, clock: impl Clock + 'static, config: TodoConfig) -> Self {
        let todos = load_snapshot(&store, &config.storage_key);
        let last_id = todos.iter().map(|t| t.id.0).max().unwrap_or(0);
        log::info!("initialized with {} todos (key '{}')", todos.len(), config.storage_key);

        let mut controller = Self {
            store,
            clock: Box::new(clock),
            config,
            todos,
            filter: Filter::default(),
            editing: None,
            last_id,
            projection: Projection::default(),
        };
        controller.render();
        controller
    }

    /// Single entry point for view intents
    pub fn dispatch(&mut self, intent: Intent) -> Option<Effect> {
        log::debug!("dispatch {:?}", intent);
        match intent {
            Intent::Add(text) => self.add(&text),
            Intent::Delete(id) => {
                self.delete(id);
                None
            }
            Intent::Toggle(id) => {
                self.toggle_complete(id);
                None
            }
            Intent::StartEdit(id) => self.start_edit(id),
            Intent::SaveEdit(text) => {
                self.save_edit(&text);
                None
            }
            Intent::CancelEdit => {
                self.cancel_edit();
                None
            }
            Intent::SetFilter(name) => {
                self.set_filter(&name);
                None
            }
            Intent::ClearCompleted => {
                self.clear_completed();
                None
            }
            Intent::Export => self.export(),
        }
    }

    // ========================
    // Operations
    // ========================

    /// Append a todo. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Effect> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        let todo = Todo::new(id, text, self.clock.now());
        log::debug!("added todo {}", id);
        self.todos.push(todo);
        self.persist();
        self.render();
        Some(Effect::ClearInput)
    }

    /// Remove the todo with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            log::debug!("delete: todo {} not found", id);
            return false;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.persist();
        self.render();
        true
    }

    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            log::debug!("toggle: todo {} not found", id);
            return false;
        };
        todo.completed = !todo.completed;
        self.persist();
        self.render();
        true
    }

    /// Put `id` into edit mode. An edit already in progress is dropped
    /// without saving.
    pub fn start_edit(&mut self, id: TodoId) -> Option<Effect> {
        if !self.todos.iter().any(|t| t.id == id) {
            log::debug!("start_edit: todo {} not found", id);
            return None;
        }
        if let Some(previous) = self.editing.filter(|prev| *prev != id) {
            log::debug!("start_edit: abandoning edit of {}", previous);
        }
        self.editing = Some(id);
        self.render();
        Some(Effect::FocusEditor(id))
    }

    /// Apply `text` to the todo being edited and leave edit mode.
    /// Returns whether the text was changed.
    pub fn save_edit(&mut self, text: &str) -> bool {
        let text = text.trim();
        let changed = match self.editing.take() {
            Some(id) if !text.is_empty() => match self.todos.iter_mut().find(|t| t.id == id) {
                Some(todo) => {
                    todo.text = text.to_string();
                    true
                }
                None => false,
            },
            _ => false,
        };
        if changed {
            self.persist();
        }
        self.render();
        changed
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.render();
    }

    /// Switch to the filter named by a `data-filter` token.
    /// Unknown tokens leave the filter unchanged.
    pub fn set_filter(&mut self, name: &str) -> bool {
        let Some(filter) = Filter::from_token(name) else {
            log::warn!("ignoring unknown filter '{}'", name);
            return false;
        };
        self.filter = filter;
        self.render();
        true
    }

    /// Drop every completed todo. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        if self.editing.is_some_and(|id| !self.todos.iter().any(|t| t.id == id)) {
            self.editing = None;
        }
        self.persist();
        self.render();
        removed
    }

    /// Produce the export download. Read-only.
    pub fn export(&self) -> Option<Effect> {
        let doc = self.export_document();
        let file_name = doc.file_name(&self.config.export_file_prefix);
        match doc.to_json() {
            Ok(contents) => {
                log::info!("exporting {} todos to {}", doc.total_count, file_name);
                Some(Effect::Download { file_name, contents })
            }
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::new(&self.todos, self.clock.now())
    }

    // ========================
    // Queries
    // ========================

    /// Todos matching the current filter, in collection order
    pub fn filtered_view(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Display state as of the last mutation
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    // ========================
    // Internals
    // ========================

    /// Millisecond timestamp, bumped past the last id when the clock
    /// has not moved on. Once that would leave the JS-safe range, the
    /// smallest free id is reused instead.
    fn next_id(&mut self) -> TodoId {
        let now_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let candidate = if now_ms > self.last_id {
            Some(now_ms)
        } else {
            self.last_id.checked_add(1)
        };
        match candidate.filter(|id| *id <= MAX_TODO_ID) {
            Some(id) => {
                self.last_id = id;
                TodoId(id)
            }
            None => {
                let id = self.smallest_free_id();
                log::warn!("id space exhausted past {}, reusing free id {}", self.last_id, id);
                id
            }
        }
    }

    fn smallest_free_id(&self) -> TodoId {
        let mut used: Vec<u64> = self.todos.iter().map(|t| t.id.0).collect();
        used.sort_unstable();
        let mut free = 0;
        for id in used {
            if id == free {
                free += 1;
            } else if id > free {
                break;
            }
        }
        TodoId(free)
    }

    fn persist(&self) {
        if let Err(e) = save_snapshot(&self.store, &self.config.storage_key, &self.todos) {
            log::error!("failed to persist {} todos: {}", self.todos.len(), e);
        }
    }

    fn render(&mut self) {
        self.projection = Projection::build(&self.todos, self.filter, self.editing);
    }
}
