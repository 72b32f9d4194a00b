pub mod login;
pub mod otp;
pub mod reset_password;
pub mod signup;
