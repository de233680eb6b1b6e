mod dashboard;
mod yahoo;
