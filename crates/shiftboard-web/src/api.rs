//! API client for the remote auth, reporting and device endpoints
//!
//! Stateless HTTP glue only: every call attaches the session token, maps
//! non-2xx statuses into the core error taxonomy and decodes the typed
//! response. A 401 clears the session, which makes the route guard
//! redirect to the login page on its own.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use shiftboard_core::models::{
    Device, LoginRequest, LoginResponse, Machine, MachineGroup, ProductionMonitorResponse,
    TableReportRequest, TableReportResponse,
};
use shiftboard_core::Error;

use crate::config;
use crate::session::SessionContext;

/// HTTP client bound to the shared session.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self {
            base_url: config::api_base_url(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Token {}", token)),
            None => builder,
        }
    }

    /// Decode a protected-endpoint response. 401 invalidates the session.
    async fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<T, Error> {
        if response.status() == 401 {
            self.session.clear();
            return Err(Error::Auth);
        }
        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Fetch {
                status: response.status(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        self.parse(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, Error> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        self.parse(response).await
    }

    /// `POST login/`. Failures here never clear or overwrite existing
    /// state; bad credentials surface as a fetch error for the form.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&self.url("login/"))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Fetch {
                status: response.status(),
                message,
            });
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// `GET devices/machinegroup/`
    pub async fn machine_groups(&self) -> Result<Vec<MachineGroup>, Error> {
        self.get("devices/machinegroup/").await
    }

    /// `GET devices/machine/`
    pub async fn machines(&self) -> Result<Vec<Machine>, Error> {
        self.get("devices/machine/").await
    }

    /// `GET data/production-monitor/`
    pub async fn production_monitor(&self) -> Result<ProductionMonitorResponse, Error> {
        self.get("data/production-monitor/").await
    }

    /// `POST data/table-report/` with normalized `YYYY-MM-DD` dates.
    pub async fn table_report(
        &self,
        request: &TableReportRequest,
    ) -> Result<TableReportResponse, Error> {
        self.post("data/table-report/", request).await
    }

    /// `GET devices/device/`
    pub async fn devices(&self) -> Result<Vec<Device>, Error> {
        self.get("devices/device/").await
    }

    /// `POST devices/device/`
    pub async fn create_device(&self, device: &Device) -> Result<Device, Error> {
        self.post("devices/device/", device).await
    }

    /// `PUT devices/device/:id/`
    pub async fn update_device(&self, device: &Device) -> Result<Device, Error> {
        let id = device.id.ok_or_else(|| {
            Error::Decode("cannot update a device without a server id".to_string())
        })?;
        let response = self
            .authorize(Request::put(&self.url(&format!("devices/device/{}/", id))))
            .json(device)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        self.parse(response).await
    }

    /// `DELETE devices/device/:id/`
    pub async fn delete_device(&self, id: u64) -> Result<(), Error> {
        let response = self
            .authorize(Request::delete(&self.url(&format!("devices/device/{}/", id))))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if response.status() == 401 {
            self.session.clear();
            return Err(Error::Auth);
        }
        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Fetch {
                status: response.status(),
                message,
            });
        }
        Ok(())
    }
}
