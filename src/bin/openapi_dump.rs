//! Print the OpenAPI document as JSON.

use postboard::ApiDoc;
use utoipa::OpenApi;

fn main() -> serde_json::Result<()> {
    println!("{}", ApiDoc::openapi().to_json()?);
    Ok(())
}
