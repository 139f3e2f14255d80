use crate::{config::ApprovalSource, data::RawAppState};
use bot_traits::TraceErr;

impl RawAppState {
    /// Whether `username` may add or remove memes.
    ///
    /// A failed table read counts as "no".
    pub async fn is_approved(&self, username: &str) -> bool {
        let approval = self.config.read().await.approval.clone();

        let approved = is_approved(&approval, username, |username| {
            self.approved_users.contains(username).trace_err_or(false)
        });

        if !approved {
            tracing::info!("{username} tried to change the memes without approval");
        }

        approved
    }
}

fn is_approved(
    source: &ApprovalSource,
    username: &str,
    table_lookup: impl FnOnce(&str) -> bool,
) -> bool {
    match source {
        ApprovalSource::Table => table_lookup(username),
        ApprovalSource::List { users } => users.iter().any(|user| user == username),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_is_exact() {
        let source = ApprovalSource::List {
            users: vec!["tupperward".to_owned()],
        };
        let table = |_: &str| -> bool { panic!("list approval must not touch the table") };

        assert!(is_approved(&source, "tupperward", table));
        assert!(!is_approved(&source, "Tupperward", table));
        assert!(!is_approved(&source, "tupper", table));
    }

    #[test]
    fn table_defers_to_lookup() {
        assert!(is_approved(&ApprovalSource::Table, "smoltz", |name| name == "smoltz"));
        assert!(!is_approved(&ApprovalSource::Table, "smoltz", |_| false));
    }
}
