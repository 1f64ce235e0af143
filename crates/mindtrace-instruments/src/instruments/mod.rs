pub mod gad7;
pub mod phq9;
pub mod who5;
pub mod whoqol_bref;
