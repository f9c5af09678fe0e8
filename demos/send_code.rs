use std::io;

use sendcloud_sms::{ClientConfig, SendCode, VerificationCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("SENDCLOUD_CONFIG").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDCLOUD_CONFIG environment variable is required",
        )
    })?;
    let phone = std::env::var("SENDCLOUD_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDCLOUD_PHONE environment variable is required",
        )
    })?;
    let code = std::env::var("SENDCLOUD_CODE").unwrap_or_else(|_| "123456".to_owned());

    let raw = std::fs::read_to_string(config_path)?;
    let config: ClientConfig = serde_json::from_str(&raw)?;
    let client = config.into_client()?;

    let result = client
        .send_code(SendCode::new(phone, VerificationCode::new(code)?))
        .await?;
    println!(
        "success: {}, status_code: {:?}, message: {:?}",
        result.success, result.status_code, result.message
    );

    Ok(())
}
