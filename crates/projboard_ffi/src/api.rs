//! FFI use-case API for UI hosts.
//!
//! # Responsibility
//! - Expose board events (submit, drag, drop) as sync calls for the host.
//! - Return plain data the host can render without touching core types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One board exists per UI thread; it is created lazily with defaults.

use log::warn;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardConfig, DataTransfer, DropOutcome, MemorySurface, MoveOutcome, ProjectBoard, ProjectId,
    ProjectStatus, SharedSurface, APP_HOST_ID,
};
use std::cell::RefCell;
use std::rc::Rc;

struct BoardSession {
    board: ProjectBoard,
    surface: Rc<RefCell<MemorySurface>>,
}

impl BoardSession {
    fn new(config: BoardConfig) -> Result<Self, String> {
        let surface = Rc::new(RefCell::new(MemorySurface::new()));
        let shared: SharedSurface = surface.clone();
        let board = ProjectBoard::new(config, shared).map_err(|err| err.to_string())?;
        Ok(Self { board, surface })
    }
}

thread_local! {
    static SESSION: RefCell<Option<BoardSession>> = const { RefCell::new(None) };
}

/// Minimal health-check API.
///
/// # FFI contract
/// - Sync call, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
/// - Idempotent for the same pair; conflicting re-init returns an error.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Result envelope for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    /// Affected project id, when one is known.
    pub project_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            ok: true,
            project_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Drag payload the host copies into its native data transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime_type: String,
    pub data: String,
    pub effect_allowed: String,
}

/// Card data for one project in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// e.g. `3 persons assigned`.
    pub people_label: String,
    pub status: String,
}

/// Replaces the board of the calling thread.
///
/// `config_json` may be empty for defaults. Returns empty string on success
/// and an error message on failure; the previous board survives a failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_init(config_json: String) -> String {
    let session = BoardConfig::from_json(config_json.as_str())
        .map_err(|err| err.to_string())
        .and_then(BoardSession::new);
    match session {
        Ok(session) => SESSION.with(|slot| match slot.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = Some(session);
                String::new()
            }
            Err(_) => "board is busy".to_string(),
        }),
        Err(err) => {
            warn!("event=board_init module=ffi status=error error={err}");
            err
        }
    }
}

/// Submits the form with raw field text.
///
/// Rejected input returns `ok=false` and queues the invalid-input alert.
/// A project stored despite a listener failure returns `ok=true` with its id.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit(title: String, description: String, people: String) -> BoardActionResponse {
    match with_session(|session| Ok(session.board.submit(&title, &description, &people))) {
        Ok(Ok(id)) => BoardActionResponse::success("Project added.", Some(id.to_string())),
        Ok(Err(err)) => match err.stored_project() {
            Some(id) => {
                warn!("event=board_submit module=ffi status=partial project_id={id} error={err}");
                BoardActionResponse::success(
                    format!("Project added; list refresh failed: {err}"),
                    Some(id.to_string()),
                )
            }
            None => BoardActionResponse::failure(format!("board_submit failed: {err}")),
        },
        Err(err) => BoardActionResponse::failure(format!("board_submit failed: {err}")),
    }
}

/// Starts dragging a card; `None` when the card is not on the board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_start(project_id: String) -> Option<DragPayload> {
    with_session(|session| {
        let id = ProjectId::from(project_id.trim());
        let transfer = session
            .board
            .begin_drag(&id)
            .ok_or_else(|| format!("card not found: {id}"))?;
        let (mime_type, data) = transfer
            .types()
            .first()
            .and_then(|mime| transfer.get_data(mime).map(|data| (mime.to_string(), data.to_string())))
            .ok_or_else(|| "card wrote no payload".to_string())?;
        Ok(DragPayload {
            mime_type,
            data,
            effect_allowed: transfer.effect_allowed().as_str().to_string(),
        })
    })
    .ok()
}

/// Hover over a list. `types` are the MIME types the host reports; data is
/// not readable during hover. Returns whether the host should allow the drop.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_over(list: String, types: Vec<String>) -> bool {
    with_session(|session| {
        let status = parse_list(&list)?;
        let transfer = DataTransfer::from_entries(types.into_iter().map(|mime| (mime, String::new())));
        Ok(session.board.drag_over(status, &transfer))
    })
    .unwrap_or(false)
}

/// Pointer left `list`; clears its drop highlight. Returns empty string on
/// success and an error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_leave(list: String) -> String {
    match with_session(|session| {
        session.board.drag_leave(parse_list(&list)?);
        Ok(())
    }) {
        Ok(()) => String::new(),
        Err(err) => {
            warn!("event=board_drag_leave module=ffi status=error error={err}");
            err
        }
    }
}

/// Drops the host payload onto a list.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop(list: String, mime_type: String, data: String) -> BoardActionResponse {
    let result = with_session(|session| {
        let status = parse_list(&list)?;
        let transfer = DataTransfer::from_entries([(mime_type, data)]);
        session
            .board
            .drop(status, &transfer)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(DropOutcome::Move(MoveOutcome::Moved)) => BoardActionResponse::success("Project moved.", None),
        Ok(DropOutcome::Move(MoveOutcome::Unchanged)) => {
            BoardActionResponse::success("Project already in list.", None)
        }
        Ok(DropOutcome::Move(MoveOutcome::NotFound)) => {
            BoardActionResponse::success("Unknown project; nothing moved.", None)
        }
        Ok(DropOutcome::NoPayload) => BoardActionResponse::success("No payload; nothing moved.", None),
        Err(err) => BoardActionResponse::failure(format!("board_drop failed: {err}")),
    }
}

/// Drag gesture finished for the card. Returns empty string on success and
/// an error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_end(project_id: String) -> String {
    match with_session(|session| {
        session.board.end_drag(&ProjectId::from(project_id.trim()));
        Ok(())
    }) {
        Ok(()) => String::new(),
        Err(err) => {
            warn!("event=board_drag_end module=ffi status=error error={err}");
            err
        }
    }
}

/// Cards currently shown in `list` (`active|finished`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_list(list: String) -> Vec<BoardProjectItem> {
    with_session(|session| {
        let status = parse_list(&list)?;
        let items = session
            .board
            .list(status)
            .borrow()
            .assigned()
            .iter()
            .map(|item| BoardProjectItem {
                id: item.id().to_string(),
                title: item.project().title.clone(),
                description: item.project().description.clone(),
                people_label: format!("{} assigned", item.persons()),
                status: item.project().status.to_string(),
            })
            .collect();
        Ok(items)
    })
    .unwrap_or_default()
}

/// Drains alerts raised since the last call.
#[flutter_rust_bridge::frb(sync)]
pub fn board_take_alerts() -> Vec<String> {
    with_session(|session| Ok(session.surface.borrow_mut().take_alerts())).unwrap_or_default()
}

/// Plain-text outline of the whole board, for diagnostics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_render_text() -> String {
    with_session(|session| Ok(session.surface.borrow().render_text(APP_HOST_ID)))
        .unwrap_or_else(|err| err)
}

fn parse_list(list: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::parse(list).ok_or_else(|| format!("unknown list `{list}`; expected active|finished"))
}

fn with_session<T>(f: impl FnOnce(&BoardSession) -> Result<T, String>) -> Result<T, String> {
    SESSION.with(|slot| {
        let mut slot = slot
            .try_borrow_mut()
            .map_err(|_| "board is busy".to_string())?;
        if slot.is_none() {
            *slot = Some(BoardSession::new(BoardConfig::default())?);
        }
        match slot.as_ref() {
            Some(session) => f(session),
            None => Err("board is not initialized".to_string()),
        }
    })
}
