mod custom_tour;
mod health_check;
