use crate::config::Config;
use crate::services::CafeDraft;

pub async fn cmd_edit_cafe(config: &Config, cafe_id: i32, draft: CafeDraft) -> anyhow::Result<()> {
    let client = super::logged_in_client(config).await?;
    let reply = client.edit_cafe(cafe_id, &draft).await?;

    if reply.landed_home() {
        println!("Cafe {cafe_id} has been updated to '{}'.", draft.name);
    } else {
        println!("Cafe {cafe_id} was not updated (ended on {}).", reply.landed_on);
        println!("A cafe named '{}' may already exist.", draft.name);
    }

    Ok(())
}
