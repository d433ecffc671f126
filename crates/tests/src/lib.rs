#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod admin_tests;
