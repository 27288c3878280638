//! Response helper extensions.

use salvo::{
    http::header::LOCATION,
    prelude::{Response, StatusCode, StatusError},
};
use tracing::error;

pub(crate) trait ResponseExt {
    /// `201 Created` pointing at the new resource.
    fn respond_created(&mut self, location: String) -> Result<(), StatusError>;
}

impl ResponseExt for Response {
    fn respond_created(&mut self, location: String) -> Result<(), StatusError> {
        self.add_header(LOCATION, location.as_str(), true)
            .map_err(|source| {
                error!(%location, "failed to set location header: {source}");

                StatusError::internal_server_error()
            })?
            .status_code(StatusCode::CREATED);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn created(req: &mut Request, res: &mut Response) {
        let location = req.query::<String>("location").unwrap_or_default();

        if let Err(error) = res.respond_created(location) {
            res.status_code(error.code);
        }
    }

    fn make_service() -> Service {
        Service::new(Router::with_path("things").post(created))
    }

    #[tokio::test]
    async fn sets_status_and_location() {
        let res = TestClient::post("http://example.com/things?location=/carts/abc")
            .send(&make_service())
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/carts/abc"));
    }

    #[tokio::test]
    async fn unusable_location_is_internal_server_error() {
        let res = TestClient::post("http://example.com/things?location=%0Abroken")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(res.headers().get("location").is_none());
    }
}
