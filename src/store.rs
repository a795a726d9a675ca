//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every user or
//! timer event is a plain `&mut self` transition on [`AppState`]; network work
//! is handed back to the caller as request descriptors carrying a sequence
//! number, and responses are only applied if they answer the newest request.

use reactive_stores::Store;

use crate::models::{Category, Complaint, Level, NewComplaint, Priority, Stats, Status, DEMO_USER_ID};

// ========================
// View Selection
// ========================

/// Which status filter the complaint list is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    All,
    Pending,
    InProgress,
    Resolved,
}

impl View {
    /// Server-side `status` filter for the list fetch
    pub fn status_filter(self) -> Option<Status> {
        match self {
            View::All => None,
            View::Pending => Some(Status::Pending),
            View::InProgress => Some(Status::InProgress),
            View::Resolved => Some(Status::Resolved),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::All => "All Complaints",
            View::Pending => "Pending Complaints",
            View::InProgress => "In Progress Complaints",
            View::Resolved => "Resolved Complaints",
        }
    }

    /// Key used in log lines
    pub fn key(self) -> &'static str {
        match self {
            View::All => "all",
            View::Pending => "pending",
            View::InProgress => "in_progress",
            View::Resolved => "resolved",
        }
    }
}

// ========================
// Requests & Notices
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Stats,
    Complaints,
}

/// Non-blocking message shown above the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A refresh failed; the previous snapshot is still on screen
    StaleData { resource: Resource, detail: String },
    /// The draft was not accepted; it is kept for another attempt
    SubmissionFailed { detail: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::StaleData { resource: Resource::Stats, detail } => {
                format!("Couldn't refresh statistics, showing the last known counts ({})", detail)
            }
            Notice::StaleData { resource: Resource::Complaints, detail } => {
                format!("Couldn't load complaints ({})", detail)
            }
            Notice::SubmissionFailed { detail } => {
                format!("Submission failed, please retry ({})", detail)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRequest {
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub seq: u64,
    pub status: Option<Status>,
}

/// Fetches to issue after a mount, tick or successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    pub stats: StatsRequest,
    pub list: Option<ListRequest>,
}

/// Newest sequence number issued per resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    pub stats: u64,
    pub list: u64,
}

impl RequestSeq {
    fn next_stats(&mut self) -> StatsRequest {
        self.stats += 1;
        StatsRequest { seq: self.stats }
    }

    fn next_list(&mut self, view: View) -> ListRequest {
        self.list += 1;
        ListRequest { seq: self.list, status: view.status_filter() }
    }

    /// Stats every time, the list only while showing everything
    pub fn tick(&mut self, view: View) -> Refresh {
        let stats = self.next_stats();
        let list = (view == View::All).then(|| self.next_list(view));
        Refresh { stats, list }
    }
}

// ========================
// State
// ========================

/// Quick Report form fields
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Draft {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    pub level: Level,
}

impl Draft {
    /// Payload for the service, or None if there is nothing to report
    pub fn to_payload(&self) -> Option<NewComplaint> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(NewComplaint {
            user_id: DEMO_USER_ID.to_string(),
            text: self.text.clone(),
            category: self.category,
            priority: self.priority,
            level: self.level,
        })
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current status filter
    pub view: View,
    /// Last accepted stats snapshot
    pub stats: Stats,
    /// Last accepted list for `view`
    pub complaints: Vec<Complaint>,
    pub draft: Draft,
    pub notice: Option<Notice>,
    /// A POST is in flight
    pub submitting: bool,
    pub seq: RequestSeq,
}

/// Outcome of offering a response to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Answers an older request; ignored
    Stale,
    /// Current, but nothing rendered changed
    Unchanged,
    /// Current and the rendered state changed
    Updated,
}

impl Applied {
    pub fn is_current(self) -> bool {
        self != Applied::Stale
    }

    /// Whether subscribers need to hear about it
    pub fn changed(self) -> bool {
        self == Applied::Updated
    }

    fn from_change(changed: bool) -> Self {
        if changed { Applied::Updated } else { Applied::Unchanged }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load: stats plus the unfiltered list
    pub fn mount(&mut self) -> Refresh {
        self.view = View::All;
        Refresh { stats: self.seq.next_stats(), list: Some(self.seq.next_list(View::All)) }
    }

    /// Periodic refresh. Filtered views are only refreshed on user action.
    /// Only `seq` moves; nothing rendered changes.
    pub fn tick(&mut self) -> Refresh {
        self.seq.tick(self.view)
    }

    /// Stat tile click: always exactly one list fetch. Switching to another
    /// view drops the old list so it is never shown under the new title.
    pub fn select_view(&mut self, view: View) -> ListRequest {
        if view != self.view {
            self.complaints.clear();
        }
        self.view = view;
        self.seq.next_list(view)
    }

    pub fn apply_stats(&mut self, req: StatsRequest, stats: Stats) -> Applied {
        if req.seq != self.seq.stats {
            return Applied::Stale;
        }
        let mut changed = self.stats != stats;
        self.stats = stats;
        changed |= self.clear_stale(Resource::Stats);
        Applied::from_change(changed)
    }

    pub fn apply_complaints(&mut self, req: ListRequest, complaints: Vec<Complaint>) -> Applied {
        if req.seq != self.seq.list {
            return Applied::Stale;
        }
        let mut changed = self.complaints != complaints;
        self.complaints = complaints;
        changed |= self.clear_stale(Resource::Complaints);
        Applied::from_change(changed)
    }

    pub fn stats_failed(&mut self, req: StatsRequest, detail: String) -> Applied {
        if req.seq != self.seq.stats {
            return Applied::Stale;
        }
        Applied::from_change(self.raise_stale(Resource::Stats, detail))
    }

    pub fn complaints_failed(&mut self, req: ListRequest, detail: String) -> Applied {
        if req.seq != self.seq.list {
            return Applied::Stale;
        }
        Applied::from_change(self.raise_stale(Resource::Complaints, detail))
    }

    /// Validates the draft and marks a submission in flight.
    /// Returns None (and changes nothing) for blank text or while busy.
    pub fn begin_submission(&mut self) -> Option<NewComplaint> {
        if self.submitting {
            return None;
        }
        let payload = self.draft.to_payload()?;
        self.submitting = true;
        Some(payload)
    }

    pub fn submission_succeeded(&mut self) -> Refresh {
        self.submitting = false;
        self.draft.text.clear();
        if matches!(self.notice, Some(Notice::SubmissionFailed { .. })) {
            self.notice = None;
        }
        self.tick()
    }

    pub fn submission_failed(&mut self, detail: String) {
        self.submitting = false;
        self.notice = Some(Notice::SubmissionFailed { detail });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn raise_stale(&mut self, resource: Resource, detail: String) -> bool {
        // a pending retry prompt outranks a stale-data hint
        if matches!(self.notice, Some(Notice::SubmissionFailed { .. })) {
            return false;
        }
        let notice = Some(Notice::StaleData { resource, detail });
        if self.notice == notice {
            return false;
        }
        self.notice = notice;
        true
    }

    fn clear_stale(&mut self, resource: Resource) -> bool {
        if matches!(&self.notice, Some(Notice::StaleData { resource: r, .. }) if *r == resource) {
            self.notice = None;
            return true;
        }
        false
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
