use crate::config::Config;
use crate::services::{CafeDraft, SubmissionController, SubmitOutcome};

pub async fn cmd_add_cafe(config: &Config, draft: CafeDraft) -> anyhow::Result<()> {
    let client = super::logged_in_client(config).await?;
    let mut form = draft.to_form();

    match SubmissionController::new(client).submit(&mut form).await? {
        SubmitOutcome::Posted => println!("Cafe {} has been posted.", draft.name),
        SubmitOutcome::Bounced { landed_on } => {
            println!("The backend did not accept '{}' (redirected to {landed_on}).", draft.name);
            println!("A cafe with that name may already exist.");
        }
    }

    Ok(())
}
