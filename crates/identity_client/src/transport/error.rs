// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;
use thiserror::Error;

/// Transport error.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("bad response {status}: {body}")]
    BadResponse {
        /// The response status.
        status: StatusCode,
        /// The response body text.
        body: String,
    },

    /// The response body is not valid json.
    #[error("response decode error: {}", source)]
    Decode {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },

    /// The token cannot be carried in a header.
    #[error("invalid token header: {}", source)]
    InvalidHeader {
        /// The source of the error.
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Request sending error.
    #[error(transparent)]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// Url parsing error.
    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },
}
