/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Output structures for operations.

/// Output of the `ActivateGateway` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ActivateGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
}
impl ActivateGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }
}
impl std::fmt::Debug for ActivateGatewayOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ActivateGatewayOutput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.finish()
    }
}
/// See [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput).
pub mod activate_gateway_output {

    /// A builder for [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput).
        pub fn build(self) -> crate::output::ActivateGatewayOutput {
            crate::output::ActivateGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl ActivateGatewayOutput {
    /// Creates a new builder-style object to manufacture [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput).
    pub fn builder() -> crate::output::activate_gateway_output::Builder {
        crate::output::activate_gateway_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::activate_gateway_output::Builder {
        crate::output::activate_gateway_output::Builder {
            gateway_arn: self.gateway_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for ActivateGatewayOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for ActivateGatewayOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `CreateNFSFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
}
impl CreateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }
}
impl std::fmt::Debug for CreateNfsFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateNfsFileShareOutput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.finish()
    }
}
/// See [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput).
pub mod create_nfs_file_share_output {

    /// A builder for [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput).
        pub fn build(self) -> crate::output::CreateNfsFileShareOutput {
            crate::output::CreateNfsFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl CreateNfsFileShareOutput {
    /// Creates a new builder-style object to manufacture [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput).
    pub fn builder() -> crate::output::create_nfs_file_share_output::Builder {
        crate::output::create_nfs_file_share_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::create_nfs_file_share_output::Builder {
        crate::output::create_nfs_file_share_output::Builder {
            file_share_arn: self.file_share_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for CreateNfsFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateNfsFileShareOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `UpdateNFSFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
}
impl UpdateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }
}
impl std::fmt::Debug for UpdateNfsFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateNfsFileShareOutput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.finish()
    }
}
/// See [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput).
pub mod update_nfs_file_share_output {

    /// A builder for [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput).
        pub fn build(self) -> crate::output::UpdateNfsFileShareOutput {
            crate::output::UpdateNfsFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl UpdateNfsFileShareOutput {
    /// Creates a new builder-style object to manufacture [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput).
    pub fn builder() -> crate::output::update_nfs_file_share_output::Builder {
        crate::output::update_nfs_file_share_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::update_nfs_file_share_output::Builder {
        crate::output::update_nfs_file_share_output::Builder {
            file_share_arn: self.file_share_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for UpdateNfsFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for UpdateNfsFileShareOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `CreateSMBFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
}
impl CreateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }
}
impl std::fmt::Debug for CreateSmbFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSmbFileShareOutput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.finish()
    }
}
/// See [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput).
pub mod create_smb_file_share_output {

    /// A builder for [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput).
        pub fn build(self) -> crate::output::CreateSmbFileShareOutput {
            crate::output::CreateSmbFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl CreateSmbFileShareOutput {
    /// Creates a new builder-style object to manufacture [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput).
    pub fn builder() -> crate::output::create_smb_file_share_output::Builder {
        crate::output::create_smb_file_share_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::create_smb_file_share_output::Builder {
        crate::output::create_smb_file_share_output::Builder {
            file_share_arn: self.file_share_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for CreateSmbFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateSmbFileShareOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `UpdateSMBFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
}
impl UpdateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }
}
impl std::fmt::Debug for UpdateSmbFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateSmbFileShareOutput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.finish()
    }
}
/// See [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput).
pub mod update_smb_file_share_output {

    /// A builder for [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file share.
        pub fn set_file_share_arn(mut self, input: std::option::Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput).
        pub fn build(self) -> crate::output::UpdateSmbFileShareOutput {
            crate::output::UpdateSmbFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl UpdateSmbFileShareOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput).
    pub fn builder() -> crate::output::update_smb_file_share_output::Builder {
        crate::output::update_smb_file_share_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::update_smb_file_share_output::Builder {
        crate::output::update_smb_file_share_output::Builder {
            file_share_arn: self.file_share_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for UpdateSmbFileShareOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for UpdateSmbFileShareOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `DescribeNFSFileShares` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeNfsFileSharesOutput {
    /// An array containing a description for each requested file share.
    pub nfs_file_share_info_list: std::option::Option<std::vec::Vec<crate::model::NfsFileShareInfo>>,
}
impl DescribeNfsFileSharesOutput {
    /// An array containing a description for each requested file share.
    pub fn nfs_file_share_info_list(&self) -> std::option::Option<&[crate::model::NfsFileShareInfo]> {
        self.nfs_file_share_info_list.as_deref()
    }
}
impl std::fmt::Debug for DescribeNfsFileSharesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeNfsFileSharesOutput");
        formatter.field("nfs_file_share_info_list", &self.nfs_file_share_info_list);
        formatter.finish()
    }
}
/// See [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput).
pub mod describe_nfs_file_shares_output {

    /// A builder for [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) nfs_file_share_info_list: std::option::Option<std::vec::Vec<crate::model::NfsFileShareInfo>>,
    }
    impl Builder {
        /// Appends an item to `nfs_file_share_info_list`.
        ///
        /// To override the contents of this collection use [`set_nfs_file_share_info_list`](Self::set_nfs_file_share_info_list).
        ///
        /// An array containing a description for each requested file share.
        pub fn nfs_file_share_info_list(mut self, input: crate::model::NfsFileShareInfo) -> Self {
            let mut v = self.nfs_file_share_info_list.unwrap_or_default();
            v.push(input);
            self.nfs_file_share_info_list = Some(v);
            self
        }
        /// An array containing a description for each requested file share.
        pub fn set_nfs_file_share_info_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::NfsFileShareInfo>>) -> Self {
            self.nfs_file_share_info_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput).
        pub fn build(self) -> crate::output::DescribeNfsFileSharesOutput {
            crate::output::DescribeNfsFileSharesOutput {
                nfs_file_share_info_list: self.nfs_file_share_info_list,
            }
        }
    }
}
impl DescribeNfsFileSharesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput).
    pub fn builder() -> crate::output::describe_nfs_file_shares_output::Builder {
        crate::output::describe_nfs_file_shares_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::describe_nfs_file_shares_output::Builder {
        crate::output::describe_nfs_file_shares_output::Builder {
            nfs_file_share_info_list: self.nfs_file_share_info_list.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for DescribeNfsFileSharesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeNfsFileSharesOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `DescribeSMBFileShares` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeSmbFileSharesOutput {
    /// An array containing a description for each requested file share.
    pub smb_file_share_info_list: std::option::Option<std::vec::Vec<crate::model::SmbFileShareInfo>>,
}
impl DescribeSmbFileSharesOutput {
    /// An array containing a description for each requested file share.
    pub fn smb_file_share_info_list(&self) -> std::option::Option<&[crate::model::SmbFileShareInfo]> {
        self.smb_file_share_info_list.as_deref()
    }
}
impl std::fmt::Debug for DescribeSmbFileSharesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeSmbFileSharesOutput");
        formatter.field("smb_file_share_info_list", &self.smb_file_share_info_list);
        formatter.finish()
    }
}
/// See [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput).
pub mod describe_smb_file_shares_output {

    /// A builder for [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) smb_file_share_info_list: std::option::Option<std::vec::Vec<crate::model::SmbFileShareInfo>>,
    }
    impl Builder {
        /// Appends an item to `smb_file_share_info_list`.
        ///
        /// To override the contents of this collection use [`set_smb_file_share_info_list`](Self::set_smb_file_share_info_list).
        ///
        /// An array containing a description for each requested file share.
        pub fn smb_file_share_info_list(mut self, input: crate::model::SmbFileShareInfo) -> Self {
            let mut v = self.smb_file_share_info_list.unwrap_or_default();
            v.push(input);
            self.smb_file_share_info_list = Some(v);
            self
        }
        /// An array containing a description for each requested file share.
        pub fn set_smb_file_share_info_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::SmbFileShareInfo>>) -> Self {
            self.smb_file_share_info_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput).
        pub fn build(self) -> crate::output::DescribeSmbFileSharesOutput {
            crate::output::DescribeSmbFileSharesOutput {
                smb_file_share_info_list: self.smb_file_share_info_list,
            }
        }
    }
}
impl DescribeSmbFileSharesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput).
    pub fn builder() -> crate::output::describe_smb_file_shares_output::Builder {
        crate::output::describe_smb_file_shares_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::describe_smb_file_shares_output::Builder {
        crate::output::describe_smb_file_shares_output::Builder {
            smb_file_share_info_list: self.smb_file_share_info_list.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for DescribeSmbFileSharesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeSmbFileSharesOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `CreateStorediSCSIVolume` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateStorediScsiVolumeOutput {
    /// The Amazon Resource Name (ARN) of the configured volume.
    pub volume_arn: std::option::Option<String>,
    /// The size of the volume in bytes.
    pub volume_size_in_bytes: std::option::Option<i64>,
    /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
    pub target_arn: std::option::Option<String>,
}
impl CreateStorediScsiVolumeOutput {
    /// The Amazon Resource Name (ARN) of the configured volume.
    pub fn volume_arn(&self) -> std::option::Option<&str> {
        self.volume_arn.as_deref()
    }

    /// The size of the volume in bytes.
    pub fn volume_size_in_bytes(&self) -> std::option::Option<i64> {
        self.volume_size_in_bytes
    }

    /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
    pub fn target_arn(&self) -> std::option::Option<&str> {
        self.target_arn.as_deref()
    }
}
impl std::fmt::Debug for CreateStorediScsiVolumeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateStorediScsiVolumeOutput");
        formatter.field("volume_arn", &self.volume_arn);
        formatter.field("volume_size_in_bytes", &self.volume_size_in_bytes);
        formatter.field("target_arn", &self.target_arn);
        formatter.finish()
    }
}
/// See [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput).
pub mod create_storedi_scsi_volume_output {

    /// A builder for [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: std::option::Option<String>,
        pub(crate) volume_size_in_bytes: std::option::Option<i64>,
        pub(crate) target_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the configured volume.
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the configured volume.
        pub fn set_volume_arn(mut self, input: std::option::Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// The size of the volume in bytes.
        pub fn volume_size_in_bytes(mut self, input: i64) -> Self {
            self.volume_size_in_bytes = Some(input);
            self
        }
        /// The size of the volume in bytes.
        pub fn set_volume_size_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.volume_size_in_bytes = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the volume target, which includes the iSCSI name that initiators can use to connect to the target.
        pub fn set_target_arn(mut self, input: std::option::Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput).
        pub fn build(self) -> crate::output::CreateStorediScsiVolumeOutput {
            crate::output::CreateStorediScsiVolumeOutput {
                volume_arn: self.volume_arn,
                volume_size_in_bytes: self.volume_size_in_bytes,
                target_arn: self.target_arn,
            }
        }
    }
}
impl CreateStorediScsiVolumeOutput {
    /// Creates a new builder-style object to manufacture [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput).
    pub fn builder() -> crate::output::create_storedi_scsi_volume_output::Builder {
        crate::output::create_storedi_scsi_volume_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::create_storedi_scsi_volume_output::Builder {
        crate::output::create_storedi_scsi_volume_output::Builder {
            volume_arn: self.volume_arn.clone(),
            volume_size_in_bytes: self.volume_size_in_bytes.clone(),
            target_arn: self.target_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for CreateStorediScsiVolumeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateStorediScsiVolumeOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `DescribeStorediSCSIVolumes` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeStorediScsiVolumesOutput {
    /// Describes a single unit of output from DescribeStorediSCSIVolumes.
    pub storedi_scsi_volumes: std::option::Option<std::vec::Vec<crate::model::StorediScsiVolume>>,
}
impl DescribeStorediScsiVolumesOutput {
    /// Describes a single unit of output from DescribeStorediSCSIVolumes.
    pub fn storedi_scsi_volumes(&self) -> std::option::Option<&[crate::model::StorediScsiVolume]> {
        self.storedi_scsi_volumes.as_deref()
    }
}
impl std::fmt::Debug for DescribeStorediScsiVolumesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeStorediScsiVolumesOutput");
        formatter.field("storedi_scsi_volumes", &self.storedi_scsi_volumes);
        formatter.finish()
    }
}
/// See [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput).
pub mod describe_storedi_scsi_volumes_output {

    /// A builder for [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) storedi_scsi_volumes: std::option::Option<std::vec::Vec<crate::model::StorediScsiVolume>>,
    }
    impl Builder {
        /// Appends an item to `storedi_scsi_volumes`.
        ///
        /// To override the contents of this collection use [`set_storedi_scsi_volumes`](Self::set_storedi_scsi_volumes).
        ///
        /// Describes a single unit of output from DescribeStorediSCSIVolumes.
        pub fn storedi_scsi_volumes(mut self, input: crate::model::StorediScsiVolume) -> Self {
            let mut v = self.storedi_scsi_volumes.unwrap_or_default();
            v.push(input);
            self.storedi_scsi_volumes = Some(v);
            self
        }
        /// Describes a single unit of output from DescribeStorediSCSIVolumes.
        pub fn set_storedi_scsi_volumes(mut self, input: std::option::Option<std::vec::Vec<crate::model::StorediScsiVolume>>) -> Self {
            self.storedi_scsi_volumes = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput).
        pub fn build(self) -> crate::output::DescribeStorediScsiVolumesOutput {
            crate::output::DescribeStorediScsiVolumesOutput {
                storedi_scsi_volumes: self.storedi_scsi_volumes,
            }
        }
    }
}
impl DescribeStorediScsiVolumesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput).
    pub fn builder() -> crate::output::describe_storedi_scsi_volumes_output::Builder {
        crate::output::describe_storedi_scsi_volumes_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::describe_storedi_scsi_volumes_output::Builder {
        crate::output::describe_storedi_scsi_volumes_output::Builder {
            storedi_scsi_volumes: self.storedi_scsi_volumes.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for DescribeStorediScsiVolumesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeStorediScsiVolumesOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `DescribeCache` operation.
#[non_exhaustive]
#[derive(Clone)]
pub struct DescribeCacheOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// An array of strings that identify disks that are to be configured as working storage.
    pub disk_ids: std::option::Option<std::vec::Vec<String>>,
    /// The amount of cache in bytes allocated to a gateway.
    pub cache_allocated_in_bytes: std::option::Option<i64>,
    /// Percent use of the gateway's cache storage.
    pub cache_used_percentage: std::option::Option<f64>,
    /// The file share's contribution to the overall percentage of the gateway's cache that has not been persisted to AWS.
    pub cache_dirty_percentage: std::option::Option<f64>,
    /// Percent of application read operations from the file shares that are served from cache.
    pub cache_hit_percentage: std::option::Option<f64>,
    /// Percent of application read operations from the file shares that are not served from cache.
    pub cache_miss_percentage: std::option::Option<f64>,
}
impl DescribeCacheOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// An array of strings that identify disks that are to be configured as working storage.
    pub fn disk_ids(&self) -> std::option::Option<&[String]> {
        self.disk_ids.as_deref()
    }

    /// The amount of cache in bytes allocated to a gateway.
    pub fn cache_allocated_in_bytes(&self) -> std::option::Option<i64> {
        self.cache_allocated_in_bytes
    }

    /// Percent use of the gateway's cache storage.
    pub fn cache_used_percentage(&self) -> std::option::Option<f64> {
        self.cache_used_percentage
    }

    /// The file share's contribution to the overall percentage of the gateway's cache that has not been persisted to AWS.
    pub fn cache_dirty_percentage(&self) -> std::option::Option<f64> {
        self.cache_dirty_percentage
    }

    /// Percent of application read operations from the file shares that are served from cache.
    pub fn cache_hit_percentage(&self) -> std::option::Option<f64> {
        self.cache_hit_percentage
    }

    /// Percent of application read operations from the file shares that are not served from cache.
    pub fn cache_miss_percentage(&self) -> std::option::Option<f64> {
        self.cache_miss_percentage
    }
}
impl std::fmt::Debug for DescribeCacheOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeCacheOutput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("disk_ids", &self.disk_ids);
        formatter.field("cache_allocated_in_bytes", &self.cache_allocated_in_bytes);
        formatter.field("cache_used_percentage", &self.cache_used_percentage);
        formatter.field("cache_dirty_percentage", &self.cache_dirty_percentage);
        formatter.field("cache_hit_percentage", &self.cache_hit_percentage);
        formatter.field("cache_miss_percentage", &self.cache_miss_percentage);
        formatter.finish()
    }
}
/// See [`DescribeCacheOutput`](crate::output::DescribeCacheOutput).
pub mod describe_cache_output {

    /// A builder for [`DescribeCacheOutput`](crate::output::DescribeCacheOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) disk_ids: std::option::Option<std::vec::Vec<String>>,
        pub(crate) cache_allocated_in_bytes: std::option::Option<i64>,
        pub(crate) cache_used_percentage: std::option::Option<f64>,
        pub(crate) cache_dirty_percentage: std::option::Option<f64>,
        pub(crate) cache_hit_percentage: std::option::Option<f64>,
        pub(crate) cache_miss_percentage: std::option::Option<f64>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `disk_ids`.
        ///
        /// To override the contents of this collection use [`set_disk_ids`](Self::set_disk_ids).
        ///
        /// An array of strings that identify disks that are to be configured as working storage.
        pub fn disk_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.disk_ids.unwrap_or_default();
            v.push(input.into());
            self.disk_ids = Some(v);
            self
        }
        /// An array of strings that identify disks that are to be configured as working storage.
        pub fn set_disk_ids(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.disk_ids = input;
            self
        }
        /// The amount of cache in bytes allocated to a gateway.
        pub fn cache_allocated_in_bytes(mut self, input: i64) -> Self {
            self.cache_allocated_in_bytes = Some(input);
            self
        }
        /// The amount of cache in bytes allocated to a gateway.
        pub fn set_cache_allocated_in_bytes(mut self, input: std::option::Option<i64>) -> Self {
            self.cache_allocated_in_bytes = input;
            self
        }
        /// Percent use of the gateway's cache storage.
        pub fn cache_used_percentage(mut self, input: f64) -> Self {
            self.cache_used_percentage = Some(input);
            self
        }
        /// Percent use of the gateway's cache storage.
        pub fn set_cache_used_percentage(mut self, input: std::option::Option<f64>) -> Self {
            self.cache_used_percentage = input;
            self
        }
        /// The file share's contribution to the overall percentage of the gateway's cache that has not been persisted to AWS.
        pub fn cache_dirty_percentage(mut self, input: f64) -> Self {
            self.cache_dirty_percentage = Some(input);
            self
        }
        /// The file share's contribution to the overall percentage of the gateway's cache that has not been persisted to AWS.
        pub fn set_cache_dirty_percentage(mut self, input: std::option::Option<f64>) -> Self {
            self.cache_dirty_percentage = input;
            self
        }
        /// Percent of application read operations from the file shares that are served from cache.
        pub fn cache_hit_percentage(mut self, input: f64) -> Self {
            self.cache_hit_percentage = Some(input);
            self
        }
        /// Percent of application read operations from the file shares that are served from cache.
        pub fn set_cache_hit_percentage(mut self, input: std::option::Option<f64>) -> Self {
            self.cache_hit_percentage = input;
            self
        }
        /// Percent of application read operations from the file shares that are not served from cache.
        pub fn cache_miss_percentage(mut self, input: f64) -> Self {
            self.cache_miss_percentage = Some(input);
            self
        }
        /// Percent of application read operations from the file shares that are not served from cache.
        pub fn set_cache_miss_percentage(mut self, input: std::option::Option<f64>) -> Self {
            self.cache_miss_percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCacheOutput`](crate::output::DescribeCacheOutput).
        pub fn build(self) -> crate::output::DescribeCacheOutput {
            crate::output::DescribeCacheOutput {
                gateway_arn: self.gateway_arn,
                disk_ids: self.disk_ids,
                cache_allocated_in_bytes: self.cache_allocated_in_bytes,
                cache_used_percentage: self.cache_used_percentage,
                cache_dirty_percentage: self.cache_dirty_percentage,
                cache_hit_percentage: self.cache_hit_percentage,
                cache_miss_percentage: self.cache_miss_percentage,
            }
        }
    }
}
impl DescribeCacheOutput {
    /// Creates a new builder-style object to manufacture [`DescribeCacheOutput`](crate::output::DescribeCacheOutput).
    pub fn builder() -> crate::output::describe_cache_output::Builder {
        crate::output::describe_cache_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::describe_cache_output::Builder {
        crate::output::describe_cache_output::Builder {
            gateway_arn: self.gateway_arn.clone(),
            disk_ids: self.disk_ids.clone(),
            cache_allocated_in_bytes: self.cache_allocated_in_bytes.clone(),
            cache_used_percentage: self.cache_used_percentage.clone(),
            cache_dirty_percentage: self.cache_dirty_percentage.clone(),
            cache_hit_percentage: self.cache_hit_percentage.clone(),
            cache_miss_percentage: self.cache_miss_percentage.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for DescribeCacheOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::cmp::PartialEq for DescribeCacheOutput {
    fn eq(&self, other: &Self) -> bool {
        self.gateway_arn == other.gateway_arn
            && self.disk_ids == other.disk_ids
            && self.cache_allocated_in_bytes == other.cache_allocated_in_bytes
            && aws_smithy_types::hash_code::optional_double_eq(self.cache_used_percentage, other.cache_used_percentage)
            && aws_smithy_types::hash_code::optional_double_eq(self.cache_dirty_percentage, other.cache_dirty_percentage)
            && aws_smithy_types::hash_code::optional_double_eq(self.cache_hit_percentage, other.cache_hit_percentage)
            && aws_smithy_types::hash_code::optional_double_eq(self.cache_miss_percentage, other.cache_miss_percentage)
    }
}
impl std::cmp::Eq for DescribeCacheOutput {}
impl std::hash::Hash for DescribeCacheOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `JoinDomain` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct JoinDomainOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// Indicates the status of the gateway as a member of the Active Directory domain.
    pub active_directory_status: std::option::Option<crate::model::ActiveDirectoryStatus>,
}
impl JoinDomainOutput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// Indicates the status of the gateway as a member of the Active Directory domain.
    pub fn active_directory_status(&self) -> std::option::Option<&crate::model::ActiveDirectoryStatus> {
        self.active_directory_status.as_ref()
    }
}
impl std::fmt::Debug for JoinDomainOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JoinDomainOutput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("active_directory_status", &self.active_directory_status);
        formatter.finish()
    }
}
/// See [`JoinDomainOutput`](crate::output::JoinDomainOutput).
pub mod join_domain_output {

    /// A builder for [`JoinDomainOutput`](crate::output::JoinDomainOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) active_directory_status: std::option::Option<crate::model::ActiveDirectoryStatus>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the gateway.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Indicates the status of the gateway as a member of the Active Directory domain.
        pub fn active_directory_status(mut self, input: impl Into<crate::model::ActiveDirectoryStatus>) -> Self {
            self.active_directory_status = Some(input.into());
            self
        }
        /// Indicates the status of the gateway as a member of the Active Directory domain.
        pub fn set_active_directory_status(mut self, input: std::option::Option<crate::model::ActiveDirectoryStatus>) -> Self {
            self.active_directory_status = input;
            self
        }
        /// Consumes the builder and constructs a [`JoinDomainOutput`](crate::output::JoinDomainOutput).
        pub fn build(self) -> crate::output::JoinDomainOutput {
            crate::output::JoinDomainOutput {
                gateway_arn: self.gateway_arn,
                active_directory_status: self.active_directory_status,
            }
        }
    }
}
impl JoinDomainOutput {
    /// Creates a new builder-style object to manufacture [`JoinDomainOutput`](crate::output::JoinDomainOutput).
    pub fn builder() -> crate::output::join_domain_output::Builder {
        crate::output::join_domain_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::join_domain_output::Builder {
        crate::output::join_domain_output::Builder {
            gateway_arn: self.gateway_arn.clone(),
            active_directory_status: self.active_directory_status.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for JoinDomainOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for JoinDomainOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `DescribeTapes` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeTapesOutput {
    /// An array of virtual tape descriptions.
    pub tapes: std::option::Option<std::vec::Vec<crate::model::Tape>>,
    /// An opaque string which can be used as part of a subsequent DescribeTapes call to retrieve the next page of results.
    pub marker: std::option::Option<String>,
}
impl DescribeTapesOutput {
    /// An array of virtual tape descriptions.
    pub fn tapes(&self) -> std::option::Option<&[crate::model::Tape]> {
        self.tapes.as_deref()
    }

    /// An opaque string which can be used as part of a subsequent DescribeTapes call to retrieve the next page of results.
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl std::fmt::Debug for DescribeTapesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeTapesOutput");
        formatter.field("tapes", &self.tapes);
        formatter.field("marker", &self.marker);
        formatter.finish()
    }
}
/// See [`DescribeTapesOutput`](crate::output::DescribeTapesOutput).
pub mod describe_tapes_output {

    /// A builder for [`DescribeTapesOutput`](crate::output::DescribeTapesOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tapes: std::option::Option<std::vec::Vec<crate::model::Tape>>,
        pub(crate) marker: std::option::Option<String>,
    }
    impl Builder {
        /// Appends an item to `tapes`.
        ///
        /// To override the contents of this collection use [`set_tapes`](Self::set_tapes).
        ///
        /// An array of virtual tape descriptions.
        pub fn tapes(mut self, input: crate::model::Tape) -> Self {
            let mut v = self.tapes.unwrap_or_default();
            v.push(input);
            self.tapes = Some(v);
            self
        }
        /// An array of virtual tape descriptions.
        pub fn set_tapes(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tape>>) -> Self {
            self.tapes = input;
            self
        }
        /// An opaque string which can be used as part of a subsequent DescribeTapes call to retrieve the next page of results.
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        /// An opaque string which can be used as part of a subsequent DescribeTapes call to retrieve the next page of results.
        pub fn set_marker(mut self, input: std::option::Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTapesOutput`](crate::output::DescribeTapesOutput).
        pub fn build(self) -> crate::output::DescribeTapesOutput {
            crate::output::DescribeTapesOutput {
                tapes: self.tapes,
                marker: self.marker,
            }
        }
    }
}
impl DescribeTapesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTapesOutput`](crate::output::DescribeTapesOutput).
    pub fn builder() -> crate::output::describe_tapes_output::Builder {
        crate::output::describe_tapes_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::describe_tapes_output::Builder {
        crate::output::describe_tapes_output::Builder {
            tapes: self.tapes.clone(),
            marker: self.marker.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for DescribeTapesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeTapesOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Output of the `AddTagsToResource` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct AddTagsToResourceOutput {
    /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
    pub resource_arn: std::option::Option<String>,
}
impl AddTagsToResourceOutput {
    /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
}
impl std::fmt::Debug for AddTagsToResourceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddTagsToResourceOutput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.finish()
    }
}
/// See [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
pub mod add_tags_to_resource_output {

    /// A builder for [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<String>,
    }
    impl Builder {
        /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
        pub fn set_resource_arn(mut self, input: std::option::Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
        pub fn build(self) -> crate::output::AddTagsToResourceOutput {
            crate::output::AddTagsToResourceOutput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
impl AddTagsToResourceOutput {
    /// Creates a new builder-style object to manufacture [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput).
    pub fn builder() -> crate::output::add_tags_to_resource_output::Builder {
        crate::output::add_tags_to_resource_output::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::output::add_tags_to_resource_output::Builder {
        crate::output::add_tags_to_resource_output::Builder {
            resource_arn: self.resource_arn.clone(),
        }
    }

    /// Hash code folded from the member values in declaration order.
    ///
    /// Equal shapes have equal hash codes, and the value is stable across processes.
    pub fn hash_code(&self) -> i32 {
        aws_smithy_schema::hash::hash_shape(self)
    }

    /// Checks the members against the constraints of the service model.
    ///
    /// Never called implicitly; the service performs its own validation.
    pub fn validate(&self) -> std::result::Result<(), aws_smithy_schema::validate::ValidationError> {
        aws_smithy_schema::validate::validate(self)
    }
}
impl std::fmt::Display for AddTagsToResourceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for AddTagsToResourceOutput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}
