use api_types::{
    expense::{Expense, ExpenseNew},
    outing::{Balance, Outing, OutingDetails, OutingId, OutingJoin, OutingNew},
    person::{Person, PersonNew},
    settlement::SettlementTransfer,
};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Result;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
    #[error("unexpected response: {0}")]
    Unexpected(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Some handlers answer `{"error": "..."}`, others plain text.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

type ClientResult<T> = std::result::Result<T, ClientError>;

/// Thin wrapper around the Birdie REST API.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "birdie request");
        self.http.request(method, self.url(path))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let res = self.request(Method::GET, path).send().await?;
        Ok(check(res).await?.json::<T>().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.request(method, path).json(body).send().await?;
        Ok(check(res).await?.json::<T>().await?)
    }

    async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let res = self.request(method, path).json(body).send().await?;
        check(res).await?;
        Ok(())
    }

    pub async fn ping(&self) -> ClientResult<()> {
        let res = self.request(Method::GET, "ping").send().await?;
        let body = check(res).await?.text().await?;
        if body.trim() == "pong" {
            Ok(())
        } else {
            Err(ClientError::Unexpected(body))
        }
    }

    pub async fn people(&self) -> ClientResult<Vec<Person>> {
        self.get_json("people").await
    }

    pub async fn create_person(&self, name: &str) -> ClientResult<Person> {
        self.send_json(
            Method::POST,
            "people",
            &PersonNew {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn outings(&self) -> ClientResult<Vec<Outing>> {
        self.get_json("outings").await
    }

    pub async fn create_outing(&self, name: &str, person_name: &str) -> ClientResult<Outing> {
        self.send_json(
            Method::POST,
            "outings",
            &OutingNew {
                name: name.to_string(),
                person_name: person_name.to_string(),
            },
        )
        .await
    }

    pub async fn outing(&self, outing_id: &OutingId) -> ClientResult<OutingDetails> {
        self.get_json(&format!("outings/{outing_id}")).await
    }

    pub async fn join_outing(&self, outing_id: &OutingId, name: &str) -> ClientResult<()> {
        self.send_unit(
            Method::PUT,
            &format!("outings/{outing_id}/join"),
            &OutingJoin {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn outing_balance(&self, outing_id: &OutingId) -> ClientResult<Balance> {
        self.get_json(&format!("outings/{outing_id}/balance")).await
    }

    pub async fn outing_expenses(&self, outing_id: &OutingId) -> ClientResult<Vec<Expense>> {
        self.get_json(&format!("outings/{outing_id}/expenses")).await
    }

    pub async fn finish_outing(&self, outing_id: &OutingId) -> ClientResult<Vec<SettlementTransfer>> {
        self.get_json(&format!("outings/{outing_id}/finish")).await
    }

    pub async fn create_expense(&self, payload: &ExpenseNew) -> ClientResult<Expense> {
        self.send_json(Method::POST, "expenses", payload).await
    }
}

async fn check(res: Response) -> ClientResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let text = res.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if text.trim().is_empty() => "unknown error".to_string(),
        Err(_) => text.trim().to_string(),
    };
    tracing::warn!(%status, message = %message, "birdie request failed");

    let err = match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::BadRequest(message)
        }
        _ => ClientError::Server { status, message },
    };
    Err(err)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use super::*;

    async fn client_for(server: &MockServer) -> Client {
        Client::new(&format!("{}/api/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn ping_expects_pong() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .mount(&server)
            .await;

        client_for(&server).await.ping().await.unwrap();
    }

    #[tokio::test]
    async fn outing_details_are_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/outings/k3m9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "outing_id": "k3m9",
                "created_at": "2023-02-11T18:30:00Z",
                "name": "Ski trip",
                "people": ["Ann", "Bob"],
            })))
            .mount(&server)
            .await;

        let id = OutingId::parse("k3m9").unwrap();
        let details = client_for(&server).await.outing(&id).await.unwrap();
        assert_eq!(details.name, "Ski trip");
        assert_eq!(details.people, vec!["Ann", "Bob"]);
    }

    #[tokio::test]
    async fn create_outing_sends_snake_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/outings"))
            .and(body_json(json!({ "name": "Ski trip", "person_name": "Ann" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "outing_id": "k3m9",
                "created_at": "2023-02-11T18:30:00Z",
                "name": "Ski trip",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outing = client_for(&server)
            .await
            .create_outing("Ski trip", "Ann")
            .await
            .unwrap();
        assert_eq!(outing.outing_id.as_str(), "k3m9");
    }

    #[tokio::test]
    async fn join_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/outings/k3m9/join"))
            .and(body_json(json!({ "name": "Bob" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let id = OutingId::parse("k3m9").unwrap();
        client_for(&server)
            .await
            .join_outing(&id, "Bob")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn bad_request_text_becomes_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/outings/zzzz/finish"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid outing ID provided"))
            .mount(&server)
            .await;

        let id = OutingId::parse("zzzz").unwrap();
        let err = client_for(&server)
            .await
            .finish_outing(&id)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::BadRequest(_)));
        assert_eq!(err.to_string(), "Invalid outing ID provided");
    }

    #[tokio::test]
    async fn json_error_body_is_unwrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/people"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "database down" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.people().await.unwrap_err();
        assert_eq!(err.to_string(), "server error (500 Internal Server Error): database down");
    }

    #[tokio::test]
    async fn expense_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/expenses"))
            .and(body_json(json!({
                "outing_id": "k3m9",
                "person_name": "Ann",
                "amount": 24.65,
                "description": null,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "expense_id": 1,
                "created_at": "2023-02-11T18:31:00Z",
                "outing_id": "k3m9",
                "person_name": "Ann",
                "amount": 24.65,
                "description": null,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = ExpenseNew {
            outing_id: OutingId::parse("k3m9").unwrap(),
            person_name: "Ann".to_string(),
            amount: 24.65,
            description: None,
        };
        let expense = client_for(&server)
            .await
            .create_expense(&payload)
            .await
            .unwrap();
        assert_eq!(expense.expense_id, 1);
    }
}
