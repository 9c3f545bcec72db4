//! Device-management (mis-remote) API wrappers.
//!
//! Thin mappings from method name to endpoint path and JSON payload; all
//! signing happens in [`Client`]. Responses are returned raw for the caller
//! to parse.

use bytes::Bytes;
use http::Response;
use seewo_core::time::{timestamp_millis, DateTime};
use seewo_core::Result;
use serde_json::{json, Map, Value};

use crate::Client;

/// Client for the device-management API.
#[derive(Clone, Debug)]
pub struct MisRemote {
    client: Client,
}

impl MisRemote {
    /// Wrap a configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Query schools by province code.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1950>.
    pub async fn schools_by_province(&self, code: &str) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-school-service/query-school-by-province",
                json!({ "provinceCode": code }),
            )
            .await
    }

    /// Query schools by city code.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1935>.
    pub async fn schools_by_city(&self, code: &str) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-school-service/query-school-by-city",
                json!({ "cityCode": code }),
            )
            .await
    }

    /// Query schools by district code.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1934>.
    pub async fn schools_by_district(&self, code: &str) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-school-service/query-school-by-district",
                json!({ "districtCode": code }),
            )
            .await
    }

    /// Query schools by school code.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1945>.
    pub async fn schools(&self, codes: &[String]) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-school-service/query-school",
                json!({ "schoolCodes": codes }),
            )
            .await
    }

    /// Query device supervision status for the given schools.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1946>.
    pub async fn school_devices(&self, codes: &[String]) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-device-manage",
                json!({ "schoolCodes": codes }),
            )
            .await
    }

    /// Query devices powered on during the given period, filtered by region.
    ///
    /// Empty filter values are omitted from the payload the way the platform
    /// expects. See <https://open.seewo.com/#/service/1315/doc/1975>.
    pub async fn online_devices(
        &self,
        start_at: DateTime,
        end_at: DateTime,
        province_code: &str,
        city_code: Option<&str>,
        district_code: Option<&str>,
        school_codes: &[String],
    ) -> Result<Response<Bytes>> {
        let mut query_dto = Map::new();
        if !province_code.is_empty() {
            query_dto.insert("provinceCode".to_string(), json!(province_code));
        }
        if let Some(code) = city_code.filter(|v| !v.is_empty()) {
            query_dto.insert("cityCode".to_string(), json!(code));
        }
        if let Some(code) = district_code.filter(|v| !v.is_empty()) {
            query_dto.insert("districtCode".to_string(), json!(code));
        }
        if !school_codes.is_empty() {
            query_dto.insert("schoolCodes".to_string(), json!(school_codes));
        }

        self.client
            .post(
                "/mis-remote/ucp-device-service/query-online-device",
                json!({
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                    "queryDto": Value::Object(query_dto),
                }),
            )
            .await
    }

    /// Query the software usage top list for the given schools.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/2082>.
    pub async fn top_software_by_school(
        &self,
        start_at: DateTime,
        end_at: DateTime,
        school_codes: &[String],
        top: u32,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-software-service/query-top-software-by-district",
                json!({
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                    "schoolCodes": school_codes,
                    "top": top,
                }),
            )
            .await
    }

    /// Query the software usage top list for a district.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/2058>.
    pub async fn top_software_by_district(
        &self,
        start_at: DateTime,
        end_at: DateTime,
        district_code: &str,
        top: u32,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-software-service/query-top-software-by-district",
                json!({
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                    "districtCode": district_code,
                    "top": top,
                }),
            )
            .await
    }

    /// Query the software usage top list for a city.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/2059>.
    pub async fn top_software_by_city(
        &self,
        start_at: DateTime,
        end_at: DateTime,
        city_code: &str,
        top: u32,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-software-service/query-top-software-by-city",
                json!({
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                    "cityCode": city_code,
                    "top": top,
                }),
            )
            .await
    }

    /// Query the software usage top list for a province.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/2060>.
    pub async fn top_software_by_province(
        &self,
        start_at: DateTime,
        end_at: DateTime,
        province_code: &str,
        top: u32,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-software-service/query-top-software-by-province",
                json!({
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                    "provinceCode": province_code,
                    "top": top,
                }),
            )
            .await
    }

    /// Query devices bound to the given schools.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1936>.
    pub async fn school_bind_devices(&self, codes: &[String]) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-device-bind",
                json!({ "schoolCodes": codes }),
            )
            .await
    }

    /// Query basic device information.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1937>.
    pub async fn school_device_base_info(&self, codes: &[String]) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-device-base-info",
                json!({ "schoolCodes": codes }),
            )
            .await
    }

    /// Query runtime device information.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1938>.
    pub async fn school_device_runtime_info(&self, codes: &[String]) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-run-attribute-by-school-code",
                json!({ "schoolCodes": codes }),
            )
            .await
    }

    /// Query device usage rates for the given period.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1939>.
    pub async fn school_device_usage(
        &self,
        codes: &[String],
        start_at: DateTime,
        end_at: DateTime,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-device-usage-by-school-code",
                json!({
                    "schoolCodes": codes,
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                }),
            )
            .await
    }

    /// Query detailed device usage statistics for the given period.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1940>.
    pub async fn school_device_statistic(
        &self,
        codes: &[String],
        start_at: DateTime,
        end_at: DateTime,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-device-service/query-device-statistic",
                json!({
                    "schoolCodes": codes,
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                }),
            )
            .await
    }

    /// Query usage details for one piece of software on school devices.
    ///
    /// See <https://open.seewo.com/#/service/1315/doc/1942>.
    pub async fn school_software_use_info(
        &self,
        codes: &[String],
        name: &str,
        start_at: DateTime,
        end_at: DateTime,
    ) -> Result<Response<Bytes>> {
        self.client
            .post(
                "/mis-remote/ucp-software-service/query-software-use",
                json!({
                    "schoolCodes": codes,
                    "softwareName": name,
                    "startDate": timestamp_millis(start_at),
                    "endDate": timestamp_millis(end_at),
                }),
            )
            .await
    }
}
