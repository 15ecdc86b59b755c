use crate::config::Config;

pub async fn cmd_close_cafe(config: &Config, cafe_id: i32) -> anyhow::Result<()> {
    let client = super::logged_in_client(config).await?;
    let reply = client.report_closed(cafe_id).await?;

    if reply.landed_home() {
        println!("Reported cafe {cafe_id} as closed.");
    } else {
        println!("Unexpected reply: ended on {} ({})", reply.landed_on, reply.status);
    }

    Ok(())
}
