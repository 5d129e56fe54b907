use std::time::Duration;

use serde::Deserialize;

use crate::api::{ApiError, ContentApi};
use crate::cli::AddArgs;
use crate::model::CreateContent;
use crate::notify::Toast;
use crate::paths;

/// Pause between the success toast and navigating to the new record.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(1500);

const GENERIC_FAILURE: &str = "Failed to add content";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Url,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Navigating { content_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("Please enter both title and content")]
    MissingManualFields,
    #[error("A submission is already in progress")]
    Busy,
}

/// The raw form fields, as posted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddContentInput {
    #[serde(default, rename = "input_type")]
    pub mode: InputMode,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl AddContentInput {
    /// Only the active mode's fields are validated and sent.
    pub fn validate(&self) -> Result<CreateContent, FormError> {
        match self.mode {
            InputMode::Url => {
                let url = self.url.trim();
                if url.is_empty() {
                    return Err(FormError::MissingUrl);
                }
                Ok(CreateContent::Url {
                    url: url.to_owned(),
                })
            }
            InputMode::Manual => {
                let title = self.title.trim();
                let content = self.content.trim();
                if title.is_empty() || content.is_empty() {
                    return Err(FormError::MissingManualFields);
                }
                Ok(CreateContent::Manual {
                    title: title.to_owned(),
                    content: content.to_owned(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate {
        content_id: String,
        location: String,
        after: Duration,
        toast: Toast,
    },
    Rejected(Toast),
}

#[derive(Debug, Clone)]
pub struct AddContentForm {
    pub input: AddContentInput,
    state: SubmitState,
}

impl AddContentForm {
    pub fn new(input: AddContentInput) -> Self {
        Self {
            input,
            state: SubmitState::Idle,
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// `Idle -> Submitting`. Invalid input or a second submit stays put.
    pub fn begin_submit(&mut self) -> Result<CreateContent, FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }
        let request = self.input.validate()?;
        self.state = SubmitState::Submitting;
        Ok(request)
    }

    /// `Submitting -> Navigating | Idle`.
    pub fn finish(&mut self, result: Result<String, ApiError>) -> SubmitOutcome {
        match result {
            Ok(content_id) => {
                self.state = SubmitState::Navigating {
                    content_id: content_id.clone(),
                };
                SubmitOutcome::Navigate {
                    location: paths::content(&content_id),
                    content_id,
                    after: NAVIGATE_DELAY,
                    toast: Toast::success("Content added successfully"),
                }
            }
            Err(err) => {
                tracing::error!(?err, "create content");
                self.state = SubmitState::Idle;
                SubmitOutcome::Rejected(Toast::error(err.detail().unwrap_or(GENERIC_FAILURE)))
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn ContentApi) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(err) => return SubmitOutcome::Rejected(Toast::error(err.to_string())),
        };
        tracing::info!(mode = ?self.input.mode, "submit content");
        let result = api.create_content(&request).await.map(|created| created.id);
        self.finish(result)
    }
}

pub async fn run(api: &dyn ContentApi, args: AddArgs) -> anyhow::Result<()> {
    let input = match (args.url, args.title, args.content) {
        (Some(url), _, _) => AddContentInput {
            mode: InputMode::Url,
            url,
            ..AddContentInput::default()
        },
        (None, title, content) => AddContentInput {
            mode: InputMode::Manual,
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            ..AddContentInput::default()
        },
    };

    let mut form = AddContentForm::new(input);
    match form.submit(api).await {
        SubmitOutcome::Navigate {
            content_id, toast, ..
        } => {
            println!("{}", toast.message);
            println!("{content_id}");
            Ok(())
        }
        SubmitOutcome::Rejected(toast) => anyhow::bail!("{}", toast.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual(title: &str, content: &str) -> AddContentInput {
        AddContentInput {
            mode: InputMode::Manual,
            title: title.to_owned(),
            content: content.to_owned(),
            ..AddContentInput::default()
        }
    }

    #[test]
    fn url_mode_requires_url_and_ignores_manual_fields() {
        let input = AddContentInput {
            mode: InputMode::Url,
            url: "  ".to_owned(),
            title: "T".to_owned(),
            content: "C".to_owned(),
        };
        assert_eq!(input.validate(), Err(FormError::MissingUrl));

        let input = AddContentInput {
            url: " https://example.com/post ".to_owned(),
            ..input
        };
        assert_eq!(
            input.validate(),
            Ok(CreateContent::Url {
                url: "https://example.com/post".to_owned()
            })
        );
    }

    #[test]
    fn manual_mode_requires_title_and_content() {
        assert_eq!(
            manual("T", "").validate(),
            Err(FormError::MissingManualFields)
        );
        assert_eq!(
            manual("", "C").validate(),
            Err(FormError::MissingManualFields)
        );
        assert!(manual("T", "C").validate().is_ok());
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut form = AddContentForm::new(manual("T", " "));
        assert!(form.begin_submit().is_err());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn second_submit_while_submitting_is_refused() {
        let mut form = AddContentForm::new(manual("T", "C"));
        assert!(form.begin_submit().is_ok());
        assert!(form.is_busy());
        assert_eq!(form.begin_submit(), Err(FormError::Busy));
    }

    #[test]
    fn success_navigates_to_new_record_after_delay() {
        let mut form = AddContentForm::new(manual("T", "C"));
        form.begin_submit().unwrap();
        let outcome = form.finish(Ok("abc123".to_owned()));
        assert_eq!(
            outcome,
            SubmitOutcome::Navigate {
                content_id: "abc123".to_owned(),
                location: "/content/abc123".to_owned(),
                after: NAVIGATE_DELAY,
                toast: Toast::success("Content added successfully"),
            }
        );
        assert_eq!(
            form.state(),
            &SubmitState::Navigating {
                content_id: "abc123".to_owned()
            }
        );
    }

    #[test]
    fn navigation_target_encodes_the_new_id() {
        let mut form = AddContentForm::new(manual("T", "C"));
        form.begin_submit().unwrap();
        match form.finish(Ok("a b/c".to_owned())) {
            SubmitOutcome::Navigate { location, .. } => {
                assert_eq!(location, "/content/a%20b%2Fc");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn failure_returns_to_idle_with_backend_detail_or_generic_message() {
        let mut form = AddContentForm::new(manual("T", "C"));
        form.begin_submit().unwrap();
        let outcome = form.finish(Err(ApiError::Rejected {
            endpoint: "http://b/api/content".to_owned(),
            status: 400,
            detail: Some("Failed to crawl URL".to_owned()),
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Toast::error("Failed to crawl URL"))
        );
        assert_eq!(form.state(), &SubmitState::Idle);

        form.begin_submit().unwrap();
        let outcome = form.finish(Err(ApiError::Rejected {
            endpoint: "http://b/api/content".to_owned(),
            status: 502,
            detail: None,
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Toast::error("Failed to add content"))
        );
    }
}
