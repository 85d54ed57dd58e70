mod admin_test;
mod helpers;
