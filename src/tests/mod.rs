mod route;
mod support;
