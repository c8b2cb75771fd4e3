use fleet_core::FleetError;
use fleet_duty::DutyError;
use fleet_output::OutputError;
use fleet_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("duty schedule error: {0}")]
    Duty(#[from] DutyError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("trip configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TripResult<T> = Result<T, TripError>;
