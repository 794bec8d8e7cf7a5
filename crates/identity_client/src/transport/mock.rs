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

use async_trait::async_trait;
use mockall::mock;

use crate::api::RestRequest;
use crate::transport::{ApiResponse, RestClient, TransportError};

mock! {
    pub RestClient {}

    #[async_trait]
    impl RestClient for RestClient {
        async fn execute(&self, request: RestRequest) -> Result<ApiResponse, TransportError>;
    }
}

impl std::fmt::Debug for MockRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MockRestClient")
    }
}
