use std::io;
use std::sync::Arc;

use sendcloud_sms::{
    Country, Credentials, SendCloudClient, SendSms, Template, TemplateId, TemplateKind,
    TemplateRegistry,
};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sms_user = required("SENDCLOUD_SMS_USER")?;
    let sms_key = required("SENDCLOUD_SMS_KEY")?;
    let template_id = required("SENDCLOUD_TEMPLATE_ID")?;
    let phones = required("SENDCLOUD_PHONES")?;
    let country = std::env::var("SENDCLOUD_COUNTRY").unwrap_or_else(|_| "CN".to_owned());

    let country = Country::parse(&country)?;
    let registry = TemplateRegistry::build([Template::new(
        TemplateId::new(template_id)?,
        TemplateKind::Generic,
        country,
    )])?;
    let client = SendCloudClient::new(
        Credentials::new(sms_user, sms_key)?,
        country,
        Arc::new(registry),
    );

    let recipients = phones.split(',').map(str::to_owned).collect();
    let request = SendSms::new(TemplateKind::Generic, recipients);

    let result = client.send(request).await?;
    println!(
        "success: {}, status_code: {:?}, message: {:?}",
        result.success, result.status_code, result.message
    );

    Ok(())
}
