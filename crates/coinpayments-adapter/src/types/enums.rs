/*
[INPUT]:  HTTP verbs supported by the dispatcher
[OUTPUT]: Typed request method enum
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the dispatcher gains another request mode
*/

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestMethod {
    /// Sends only the `hmac` header; encoded parameters are not attached.
    Get,
    #[default]
    Post,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "get",
            RequestMethod::Post => "post",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_method_display() {
        assert_eq!(RequestMethod::Post.to_string(), "post");
        assert_eq!(RequestMethod::Get.to_string(), "get");
    }

    #[test]
    fn test_request_method_defaults_to_post() {
        assert_eq!(RequestMethod::default(), RequestMethod::Post);
        assert_eq!(reqwest::Method::from(RequestMethod::Get), reqwest::Method::GET);
    }
}
