pub mod aqpredict_env;
pub mod mock_service;
