//! Implementation of the `ormkit subscriber:create` command.
//!
//! Responsibility: merge flags with settings into a `ScaffoldRequest`, wire
//! the real adapters, call the core service, report the result.  The
//! directory lookup and the template live in `ormkit-core`.

use tracing::{debug, instrument};

use ormkit_adapters::{JsonConnectionSource, LocalFilesystem};
use ormkit_core::{application::SubscriberService, domain::ScaffoldRequest};

use crate::{
    cli::SubscriberCreateArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    settings::AppSettings,
};

/// Execute `ormkit subscriber:create`.
///
/// 1. Reject an empty `--name`; warn about names that will not compile
/// 2. Merge flags with settings
/// 3. Run `SubscriberService` against the current directory
/// 4. Report the written path
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: SubscriberCreateArgs,
    settings: AppSettings,
    output: OutputManager,
) -> CliResult<()> {
    if args.name.is_empty() {
        return Err(CliError::InvalidInput {
            message: "--name cannot be empty".into(),
        });
    }
    if !is_class_identifier(&args.name) {
        output.warning(&format!(
            "'{}' is not a valid class name; the generated file will not compile",
            args.name
        ))?;
    }

    let cwd = std::env::current_dir().with_cli_context(|| "cannot determine current directory")?;
    let request = build_request(args, &settings);
    debug!(%request, config = %request.config_path().display(), "Request built");

    let service = SubscriberService::new(
        Box::new(JsonConnectionSource::new()),
        Box::new(LocalFilesystem::new()),
    );
    let path = service.execute(&request, &cwd)?;

    output.subscriber_created(request.name(), &path)?;
    Ok(())
}

/// Flags win; unset flags fall back to settings.
fn build_request(args: SubscriberCreateArgs, settings: &AppSettings) -> ScaffoldRequest {
    ScaffoldRequest::new(args.name)
        .with_optional_directory(args.dir)
        .with_connection(
            args.connection
                .unwrap_or_else(|| settings.defaults.connection.clone()),
        )
        .with_config_path(
            args.config
                .unwrap_or_else(|| settings.defaults.config_file.clone()),
        )
}

/// Letters, digits, `_` and `$`, not starting with a digit.
fn is_class_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn args(name: &str) -> SubscriberCreateArgs {
        SubscriberCreateArgs {
            name: name.into(),
            connection: None,
            dir: None,
            config: None,
        }
    }

    #[test]
    fn unset_flags_use_builtin_defaults() {
        let request = build_request(args("Foo"), &AppSettings::default());
        assert_eq!(request.connection(), "default");
        assert_eq!(request.config_path(), Path::new("ormconfig.json"));
        assert_eq!(request.directory(), None);
    }

    #[test]
    fn unset_flags_use_settings() {
        let mut settings = AppSettings::default();
        settings.defaults.connection = "reporting".into();
        settings.defaults.config_file = PathBuf::from("config/orm.json");

        let request = build_request(args("Foo"), &settings);
        assert_eq!(request.connection(), "reporting");
        assert_eq!(request.config_path(), Path::new("config/orm.json"));
    }

    #[test]
    fn flags_override_settings() {
        let mut settings = AppSettings::default();
        settings.defaults.connection = "reporting".into();

        let request = build_request(
            SubscriberCreateArgs {
                name: "Foo".into(),
                connection: Some("audit".into()),
                dir: Some("out".into()),
                config: Some(PathBuf::from("custom.json")),
            },
            &settings,
        );
        assert_eq!(request.connection(), "audit");
        assert_eq!(request.directory(), Some("out"));
        assert_eq!(request.config_path(), Path::new("custom.json"));
    }

    #[test]
    fn class_identifiers() {
        for name in ["UserSubscriber", "_Private", "$Special", "Ünicode", "V2"] {
            assert!(is_class_identifier(name), "should accept: {name}");
        }
        for name in ["", "2Fast", "user-subscriber", "My Subscriber", "a.b"] {
            assert!(!is_class_identifier(name), "should reject: {name}");
        }
    }
}
