pub mod four_band_gradient;
