use anyhow::{Context, Result};
use notecraft::{
    config::Config,
    model::create_backend,
    transform::{Operation, TransformRequest, TransformService},
};
use std::io::Read;

/// Run a single transform against the configured model and print the JSON result
pub async fn run_transform(
    config: Config,
    operation: Operation,
    text: Option<String>,
    max: Option<usize>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let backend = create_backend(&config.model).context("Failed to create model backend")?;
    let service = TransformService::new(backend, config.transform);

    let request = TransformRequest {
        text,
        operation,
        max_items: max,
    };
    let result = service.transform(request).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
