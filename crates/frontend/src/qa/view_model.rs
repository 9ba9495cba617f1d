//! Document Q&A - View Model
//!
//! Holds the page state plus the synchronous transitions around the two
//! backend calls. The async fetch lives in the model layer; the view glues
//! the two together with `spawn_local`, so everything stateful here can be
//! exercised without a browser.

use contracts::qa::{QueryResponse, UploadOutcome};
use leptos::prelude::*;

pub const UPLOAD_FAILED_NOTICE: &str = "An error occurred while uploading the file";
pub const QUERY_FAILED_NOTICE: &str = "An error occurred while querying documents";
pub const UPLOAD_FIRST_NOTICE: &str = "Please upload a PDF first";

#[derive(Clone, Copy)]
pub struct QaPageVm {
    pub question: RwSignal<String>,
    pub answer: RwSignal<String>,
    pub context: RwSignal<Vec<String>>,
    pub uploading: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub file_name: RwSignal<Option<String>>,
    pub vector_store_ready: RwSignal<bool>,
}

impl QaPageVm {
    pub fn new() -> Self {
        Self {
            question: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            context: RwSignal::new(Vec::new()),
            uploading: RwSignal::new(false),
            loading: RwSignal::new(false),
            file_name: RwSignal::new(None),
            vector_store_ready: RwSignal::new(false),
        }
    }

    /// Start an upload: raise the in-flight flag and echo the file name.
    /// The name is recorded even if the upload later fails.
    pub fn begin_upload(&self, file_name: String) {
        self.uploading.set(true);
        self.file_name.set(Some(file_name));
    }

    /// Apply the result of an upload. Returns the notification to show.
    ///
    /// Readiness only moves false -> true; a failed re-upload leaves a
    /// previously built vector store queryable.
    pub fn finish_upload(&self, result: Result<UploadOutcome, String>) -> String {
        let notice = match result {
            Ok(outcome) => {
                if outcome.is_ready() {
                    self.vector_store_ready.set(true);
                }
                outcome.message().to_string()
            }
            Err(e) => {
                log::error!("Error uploading file: {e}");
                UPLOAD_FAILED_NOTICE.to_string()
            }
        };
        self.uploading.set(false);
        notice
    }

    /// Check the query precondition and raise the in-flight flag.
    ///
    /// `Ok` carries the question to send. `Err` carries the notification to
    /// show instead; no request may be issued in that case. An empty
    /// question or an in-flight query never reaches this point because the
    /// "Ask" button is disabled for both.
    pub fn begin_query(&self) -> Result<String, String> {
        if !self.vector_store_ready.get_untracked() {
            return Err(UPLOAD_FIRST_NOTICE.to_string());
        }
        self.loading.set(true);
        Ok(self.question.get_untracked())
    }

    /// Apply the result of a query. On failure the previous answer and
    /// excerpts stay on screen. Returns the notification to show, if any.
    pub fn finish_query(&self, result: Result<QueryResponse, String>) -> Option<String> {
        let notice = match result {
            Ok(resp) => {
                self.answer.set(resp.answer);
                self.context.set(resp.context);
                None
            }
            Err(e) => {
                log::error!("Error querying documents: {e}");
                Some(QUERY_FAILED_NOTICE.to_string())
            }
        };
        self.loading.set(false);
        notice
    }
}

impl Default for QaPageVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    fn ok_response() -> Result<QueryResponse, String> {
        Ok(QueryResponse {
            answer: "X is Y".to_string(),
            context: vec!["excerpt1".to_string(), "excerpt2".to_string()],
        })
    }

    #[test]
    fn test_upload_flag_cleared_for_every_outcome() {
        with_owner(|| {
            let vm = QaPageVm::new();

            vm.begin_upload("doc.pdf".to_string());
            assert!(vm.uploading.get_untracked());
            vm.finish_upload(Ok(UploadOutcome::Ready("ok".to_string())));
            assert!(!vm.uploading.get_untracked());

            vm.begin_upload("doc.pdf".to_string());
            vm.finish_upload(Ok(UploadOutcome::Rejected("bad file".to_string())));
            assert!(!vm.uploading.get_untracked());

            vm.begin_upload("doc.pdf".to_string());
            vm.finish_upload(Err("network".to_string()));
            assert!(!vm.uploading.get_untracked());
        });
    }

    #[test]
    fn test_upload_success_sets_ready() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.begin_upload("doc.pdf".to_string());
            let notice = vm.finish_upload(Ok(UploadOutcome::Ready("ok".to_string())));
            assert!(vm.vector_store_ready.get_untracked());
            assert_eq!(notice, "ok");
        });
    }

    #[test]
    fn test_upload_rejection_keeps_readiness_and_surfaces_message() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.begin_upload("doc.pdf".to_string());
            let notice = vm.finish_upload(Ok(UploadOutcome::Rejected("bad file".to_string())));
            assert!(!vm.vector_store_ready.get_untracked());
            assert!(notice.contains("bad file"));
        });
    }

    #[test]
    fn test_failed_reupload_leaves_store_queryable() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.begin_upload("first.pdf".to_string());
            vm.finish_upload(Ok(UploadOutcome::Ready("ok".to_string())));

            vm.begin_upload("second.pdf".to_string());
            vm.finish_upload(Err("network".to_string()));

            assert!(vm.vector_store_ready.get_untracked());
            assert_eq!(
                vm.file_name.get_untracked(),
                Some("second.pdf".to_string())
            );
        });
    }

    #[test]
    fn test_query_blocked_until_ready() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.question.set("What is X?".to_string());
            assert_eq!(vm.begin_query(), Err(UPLOAD_FIRST_NOTICE.to_string()));
            assert!(!vm.loading.get_untracked());
        });
    }

    #[test]
    fn test_query_success_overwrites_answer_and_context() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.vector_store_ready.set(true);
            vm.question.set("What is X?".to_string());

            let question = vm.begin_query().unwrap();
            assert_eq!(question, "What is X?");
            assert!(vm.loading.get_untracked());

            let notice = vm.finish_query(ok_response());
            assert_eq!(notice, None);
            assert!(!vm.loading.get_untracked());
            assert_eq!(vm.answer.get_untracked(), "X is Y");
            assert_eq!(vm.context.get_untracked(), vec!["excerpt1", "excerpt2"]);
        });
    }

    #[test]
    fn test_query_failure_retains_previous_answer() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.vector_store_ready.set(true);
            vm.question.set("What is X?".to_string());

            vm.begin_query().unwrap();
            vm.finish_query(ok_response());

            vm.begin_query().unwrap();
            let notice = vm.finish_query(Err("network".to_string()));
            assert_eq!(
                notice.as_deref(),
                Some("An error occurred while querying documents")
            );
            assert!(!vm.loading.get_untracked());
            assert_eq!(vm.answer.get_untracked(), "X is Y");
            assert_eq!(vm.context.get_untracked(), vec!["excerpt1", "excerpt2"]);
        });
    }

    #[test]
    fn test_query_is_idempotent() {
        with_owner(|| {
            let vm = QaPageVm::new();
            vm.vector_store_ready.set(true);
            vm.question.set("What is X?".to_string());

            vm.begin_query().unwrap();
            vm.finish_query(ok_response());
            let answer_once = vm.answer.get_untracked();
            let context_once = vm.context.get_untracked();

            vm.begin_query().unwrap();
            vm.finish_query(ok_response());
            assert_eq!(vm.answer.get_untracked(), answer_once);
            assert_eq!(vm.context.get_untracked(), context_once);
        });
    }
}
