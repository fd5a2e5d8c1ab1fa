/// GET / - plain-text liveness confirmation
pub async fn root() -> &'static str {
    "Portfolio backend is running"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
