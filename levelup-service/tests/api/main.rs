mod helpers;
mod login;
mod progress;
mod signup;
mod verify_token;
