use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::models::Task;
use crate::state::TaskListObserver;

#[cfg(not(target_arch = "wasm32"))]
use std::{
    fs,
    path::{Path, PathBuf},
};

#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
use directories::ProjectDirs;

#[cfg(target_os = "android")]
use {
    jni::{objects::JObject, JavaVM},
    ndk_context::android_context,
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("malformed task list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A single named key-value slot holding the serialized task list.
pub trait Slot {
    fn read(&self) -> Result<Option<String>, StorageError>;
    /// Replaces the whole stored value.
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

impl<S: Slot + ?Sized> Slot for Box<S> {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        (**self).write(value)
    }
}

pub fn serialize_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn deserialize_tasks(raw: &str) -> Result<Vec<Task>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

// ---------- file slot (desktop, android) ----------

#[cfg(target_os = "android")]
fn app_data_dir() -> io::Result<PathBuf> {
    // Internal app files directory: Context.getFilesDir()
    unsafe {
        let ctx = android_context();
        let jvm = JavaVM::from_raw(ctx.vm().cast()).map_err(|e| io::Error::other(format!("jvm from raw: {e}")))?;
        let mut env = jvm
            .attach_current_thread()
            .map_err(|e| io::Error::other(format!("attach thread: {e}")))?;
        let activity = JObject::from_raw(ctx.context() as jni::sys::jobject);
        let file_obj: JObject = env
            .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])
            .and_then(|v| v.l())
            .map_err(|e| io::Error::other(format!("getFilesDir: {e}")))?;
        let path_obj: JObject = env
            .call_method(file_obj, "getAbsolutePath", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l())
            .map_err(|e| io::Error::other(format!("getAbsolutePath: {e}")))?;
        let path: String = env
            .get_string(&jni::objects::JString::from(path_obj))
            .map_err(|e| io::Error::other(format!("jstring: {e}")))?
            .into();
        Ok(PathBuf::from(path).join("data"))
    }
}

#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
fn app_data_dir() -> io::Result<PathBuf> {
    let proj = ProjectDirs::from("com", "dx", "dx_task_list")
        .ok_or_else(|| io::Error::other("unable to get project dirs"))?;
    Ok(proj.data_dir().to_path_buf())
}

/// Slot stored as `<data dir>/<key>.json`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSlot {
    pub fn open(config: &AppConfig) -> Result<Self, StorageError> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => app_data_dir()?,
        };
        fs::create_dir_all(&dir)?;
        let path = dir.join(config.slot_file_name());
        info!(path = %path.display(), "using task file");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a sibling temp file, then renames it over the slot so a crash
    /// never leaves a half-written list behind.
    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        let tmp = self.temp_path();
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

// ---------- browser localStorage ----------

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Slot for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|_| StorageError::Unavailable(format!("getItem({}) failed", self.key)))
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|_| StorageError::Unavailable(format!("setItem({}) failed", self.key)))
    }
}

// ---------- in-memory ----------

/// Clones share the same cell, so a caller can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: Rc::new(RefCell::new(Some(value.into()))) }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Durable slot for the current platform, or an in-memory one when no
/// durable location can be opened.
pub fn default_slot(config: &AppConfig) -> Box<dyn Slot> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageSlot::new(config.slot_key.clone()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileSlot::open(config) {
            Ok(slot) => Box::new(slot),
            Err(e) => {
                warn!(error = %e, "no durable storage, tasks will not survive a restart");
                Box::new(MemorySlot::new())
            }
        }
    }
}

// ---------- bridge ----------

/// Reads the initial list from a slot and rewrites the slot on every change.
pub struct PersistenceBridge<S: Slot> {
    slot: S,
}

impl<S: Slot> PersistenceBridge<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Absent, unreadable or malformed data all yield an empty list.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("no saved tasks");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "failed to read saved tasks, starting empty");
                return Vec::new();
            }
        };
        match deserialize_tasks(&raw) {
            Ok(tasks) => {
                let tasks = sanitize(tasks);
                info!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "saved tasks are malformed, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serialize_tasks(tasks)?;
        self.slot.write(&raw)?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }
}

impl<S: Slot> TaskListObserver for PersistenceBridge<S> {
    fn tasks_changed(&mut self, tasks: &[Task]) {
        if let Err(e) = self.save(tasks) {
            error!(error = %e, "failed to save tasks");
        }
    }
}

/// Drops entries that break the list invariants: blank text, repeated id.
fn sanitize(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|t| {
            if t.text.trim().is_empty() {
                warn!(id = t.id, "dropping saved task with empty text");
                return false;
            }
            if !seen.insert(t.id) {
                warn!(id = t.id, "dropping saved task with duplicate id");
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSlot;

    impl Slot for BrokenSlot {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }

        fn write(&mut self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk on fire".into()))
        }
    }

    fn sample() -> Vec<Task> {
        vec![Task::new(1, "Buy milk"), Task { completed: true, ..Task::new(2, "Walk \"dog\"") }]
    }

    #[test]
    fn serialized_form_round_trips() {
        let raw = serialize_tasks(&sample()).unwrap();
        let back = deserialize_tasks(&raw).unwrap();
        assert_eq!(back, sample());
        assert_eq!(serialize_tasks(&back).unwrap(), raw);
    }

    #[test]
    fn reads_list_written_by_legacy_build() {
        let raw = r#"[{"id":1718000000000,"text":"Buy milk ","completed":false},{"id":1718000000001,"text":"Call mum","completed":true}]"#;
        let tasks = PersistenceBridge::new(MemorySlot::with_value(raw)).load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1_718_000_000_000);
        assert!(tasks[1].completed);
    }

    #[test]
    fn absent_slot_loads_empty() {
        assert!(PersistenceBridge::new(MemorySlot::new()).load().is_empty());
    }

    #[test]
    fn malformed_slot_loads_empty() {
        for raw in ["", "not json", "{\"id\":1}", "[{\"id\":\"x\",\"text\":\"a\"}]"] {
            let bridge = PersistenceBridge::new(MemorySlot::with_value(raw));
            assert!(bridge.load().is_empty(), "expected empty list for {raw:?}");
        }
    }

    #[test]
    fn unreadable_slot_loads_empty() {
        assert!(PersistenceBridge::new(BrokenSlot).load().is_empty());
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let raw = r#"[{"id":1,"text":"a"},{"id":2,"text":"   "},{"id":1,"text":"dup"},{"id":3,"text":"c"}]"#;
        let tasks = PersistenceBridge::new(MemorySlot::with_value(raw)).load();
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(tasks[0].text, "a");
    }

    #[test]
    fn observer_overwrites_slot() {
        let slot = MemorySlot::with_value("stale");
        let mut bridge = PersistenceBridge::new(slot.clone());
        bridge.tasks_changed(&sample());
        assert_eq!(slot.value().unwrap(), serialize_tasks(&sample()).unwrap());
        bridge.tasks_changed(&[]);
        assert_eq!(slot.value().unwrap(), "[]");
    }

    #[test]
    fn failed_write_is_swallowed() {
        let mut bridge = PersistenceBridge::new(BrokenSlot);
        assert!(bridge.save(&sample()).is_err());
        bridge.tasks_changed(&sample());
    }

    #[test]
    fn file_slot_persists_between_opens() {
        let dir = std::env::temp_dir().join(format!("dx_task_list_slot_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = AppConfig::default().with_data_dir(&dir);

        let mut slot = FileSlot::open(&config).unwrap();
        assert_eq!(slot.path(), dir.join("todos.json").as_path());
        assert!(slot.read().unwrap().is_none());
        slot.write("[]").unwrap();

        let mut bridge = PersistenceBridge::new(FileSlot::open(&config).unwrap());
        assert!(bridge.load().is_empty());
        bridge.save(&sample()).unwrap();
        assert_eq!(PersistenceBridge::new(FileSlot::open(&config).unwrap()).load(), sample());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_slot_replaces_value_without_leftovers() {
        let dir = std::env::temp_dir().join(format!("dx_task_list_swap_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = AppConfig::default().with_data_dir(&dir);
        let mut slot = FileSlot::open(&config).unwrap();

        slot.write(r#"[{"id":1,"text":"a much longer first value","completed":false}]"#).unwrap();
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));

        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["todos.json".to_string()]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn stale_temp_file_does_not_shadow_slot() {
        let dir = std::env::temp_dir().join(format!("dx_task_list_stale_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = AppConfig::default().with_data_dir(&dir);
        let mut slot = FileSlot::open(&config).unwrap();
        slot.write(&serialize_tasks(&sample()).unwrap()).unwrap();
        // leftover from an interrupted write
        fs::write(dir.join("todos.json.tmp"), "[{\"id\":").unwrap();

        assert_eq!(PersistenceBridge::new(FileSlot::open(&config).unwrap()).load(), sample());

        let _ = fs::remove_dir_all(&dir);
    }
}
