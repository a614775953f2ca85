use serde::Serialize;

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub rewrite: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub provider: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
    pub provider: &'static str,
}
