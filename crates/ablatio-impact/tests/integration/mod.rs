mod cancellation;
mod failure_isolation;
mod scenarios;
