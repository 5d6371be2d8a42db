pub mod ini_params;
