use std::time::Duration;

use serde::Deserialize;

/// How long a toast stays on screen before it fades out.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    /// Appends the toast to `path` as `notice`/`level` query parameters so it
    /// survives a redirect.
    pub fn attach_to(&self, path: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("notice", &self.message)
            .append_pair("level", self.level.as_str())
            .finish();
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{path}{sep}{query}")
    }
}

/// `notice`/`level` as they arrive on the page after a redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
    pub level: Option<ToastLevel>,
}

impl NoticeParams {
    pub fn toast(&self) -> Option<Toast> {
        let message = self.notice.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }
        Some(Toast {
            level: self.level.unwrap_or(ToastLevel::Info),
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_survives_redirect_query() {
        let location = Toast::error("Failed to delete content").attach_to("/");
        assert_eq!(location, "/?notice=Failed+to+delete+content&level=error");

        let query = location.split_once('?').unwrap().1;
        let params: NoticeParams = url::form_urlencoded::parse(query.as_bytes())
            .fold(NoticeParams::default(), |mut acc, (k, v)| {
                match k.as_ref() {
                    "notice" => acc.notice = Some(v.into_owned()),
                    "level" => {
                        acc.level = serde_json::from_value(serde_json::json!(v.as_ref())).ok()
                    }
                    _ => {}
                }
                acc
            });
        assert_eq!(
            params.toast(),
            Some(Toast::error("Failed to delete content"))
        );
    }

    #[test]
    fn attach_keeps_existing_query() {
        let location = Toast::info("Refresh already in progress").attach_to("/content/c1?tab=seo");
        assert!(location.starts_with("/content/c1?tab=seo&notice="));
    }

    #[test]
    fn blank_notice_is_no_toast() {
        let params = NoticeParams {
            notice: Some("   ".to_owned()),
            level: Some(ToastLevel::Success),
        };
        assert_eq!(params.toast(), None);
    }
}
