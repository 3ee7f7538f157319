//! Display helpers kept free of UI types so they can be tested directly.

use seva::domain::registration::Attachment;
use seva::features::identity::AuthenticatedUser;
use seva::features::registration::SubmitStatus;

/// MIME type for an upload, judged by extension. Unknown extensions are passed through as
/// `application/octet-stream` and rejected by validation.
#[must_use]
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[must_use]
pub fn attachment_summary(file: &Attachment) -> String {
    format!("{} ({})", file.file_name, human_size(file.len()))
}

#[must_use]
pub fn human_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = KIB * 1024;
    match bytes {
        b if b >= MIB => format!("{}.{} MB", b / MIB, (b % MIB) * 10 / MIB),
        b if b >= KIB => format!("{} KB", b / KIB),
        b => format!("{b} B"),
    }
}

/// `1_240` → `1,240`, the way the impact banner shows counts.
#[must_use]
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Header text for the signed-in user, e.g. `Asha Patil (aryaMitra)`.
#[must_use]
pub fn signed_in_label(user: Option<&AuthenticatedUser>) -> Option<String> {
    user.map(|user| format!("{} ({})", user.name, user.role))
}

/// Banner kind and text for a submit status; `None` while idle.
#[must_use]
pub fn status_banner(status: &SubmitStatus) -> Option<(&'static str, String)> {
    match status {
        SubmitStatus::Idle => None,
        SubmitStatus::Submitting => Some(("info", "Submitting your registration...".to_owned())),
        SubmitStatus::Succeeded(receipt) => Some(("success", receipt.message.clone())),
        SubmitStatus::Failed(message) => Some(("error", message.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seva::features::identity::{Credentials, Role, Session};
    use seva::features::registration::SubmissionReceipt;

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for("aadhaar.PNG"), "image/png");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("scan.pdf"), "application/pdf");
        assert_eq!(content_type_for("notes"), "application/octet-stream");
    }

    #[test]
    fn sizes_and_counts() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2 KB");
        assert_eq!(human_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(1_240), "1,240");
        assert_eq!(grouped(4_850_000), "4,850,000");
    }

    #[test]
    fn banners_follow_status() {
        assert_eq!(status_banner(&SubmitStatus::Idle), None);
        let done = SubmitStatus::Succeeded(SubmissionReceipt {
            message: "Registration successful".into(),
            auto_login: None,
        });
        assert_eq!(status_banner(&done), Some(("success", "Registration successful".to_owned())));
        let failed = SubmitStatus::Failed("Email already registered".into());
        assert_eq!(status_banner(&failed).map(|(kind, _)| kind), Some("error"));
    }

    #[test]
    fn header_follows_session_after_auto_login() {
        let session = Session::new();
        assert_eq!(signed_in_label(session.current().as_ref()), None);

        session
            .login(Credentials {
                token: "tok-123".into(),
                user: AuthenticatedUser {
                    id: "am-1".into(),
                    name: "Asha Patil".into(),
                    email: Some("asha@example.org".into()),
                    role: Role::AryaMitra,
                },
            })
            .unwrap();

        assert_eq!(
            signed_in_label(session.current().as_ref()).as_deref(),
            Some("Asha Patil (aryaMitra)")
        );

        session.logout();
        assert_eq!(signed_in_label(session.current().as_ref()), None);
    }
}
