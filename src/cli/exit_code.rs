use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 || (result.exit_on_findings && result.finding_count > 0) {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
