pub mod surveys;
