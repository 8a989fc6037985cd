/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Input structures for operations.

/// Input for the `ActivateGateway` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct ActivateGatewayInput {
    /// Your gateway activation key, obtained by sending an HTTP GET request with redirects enabled to the gateway IP address.
    pub activation_key: std::option::Option<String>,
    /// The name you configured for your gateway.
    pub gateway_name: std::option::Option<String>,
    /// A value that indicates the time zone you want to set for the gateway, e.g. `GMT-5:00`.
    pub gateway_timezone: std::option::Option<String>,
    /// A value that indicates the AWS Region where you want to store your data.
    pub gateway_region: std::option::Option<String>,
    /// A value that defines the type of gateway to activate. The default value is `CACHED`.
    pub gateway_type: std::option::Option<String>,
    /// The value that indicates the type of tape drive to use for tape gateway.
    pub tape_drive_type: std::option::Option<String>,
    /// The value that indicates the type of medium changer to use for tape gateway.
    pub medium_changer_type: std::option::Option<String>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl ActivateGatewayInput {
    /// Your gateway activation key, obtained by sending an HTTP GET request with redirects enabled to the gateway IP address.
    pub fn activation_key(&self) -> std::option::Option<&str> {
        self.activation_key.as_deref()
    }

    /// The name you configured for your gateway.
    pub fn gateway_name(&self) -> std::option::Option<&str> {
        self.gateway_name.as_deref()
    }

    /// A value that indicates the time zone you want to set for the gateway, e.g. `GMT-5:00`.
    pub fn gateway_timezone(&self) -> std::option::Option<&str> {
        self.gateway_timezone.as_deref()
    }

    /// A value that indicates the AWS Region where you want to store your data.
    pub fn gateway_region(&self) -> std::option::Option<&str> {
        self.gateway_region.as_deref()
    }

    /// A value that defines the type of gateway to activate. The default value is `CACHED`.
    pub fn gateway_type(&self) -> std::option::Option<&str> {
        self.gateway_type.as_deref()
    }

    /// The value that indicates the type of tape drive to use for tape gateway.
    pub fn tape_drive_type(&self) -> std::option::Option<&str> {
        self.tape_drive_type.as_deref()
    }

    /// The value that indicates the type of medium changer to use for tape gateway.
    pub fn medium_changer_type(&self) -> std::option::Option<&str> {
        self.medium_changer_type.as_deref()
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for ActivateGatewayInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ActivateGatewayInput");
        formatter.field("activation_key", &self.activation_key);
        formatter.field("gateway_name", &self.gateway_name);
        formatter.field("gateway_timezone", &self.gateway_timezone);
        formatter.field("gateway_region", &self.gateway_region);
        formatter.field("gateway_type", &self.gateway_type);
        formatter.field("tape_drive_type", &self.tape_drive_type);
        formatter.field("medium_changer_type", &self.medium_changer_type);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`ActivateGatewayInput`](crate::input::ActivateGatewayInput).
pub mod activate_gateway_input {

    /// A builder for [`ActivateGatewayInput`](crate::input::ActivateGatewayInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) activation_key: std::option::Option<String>,
        pub(crate) gateway_name: std::option::Option<String>,
        pub(crate) gateway_timezone: std::option::Option<String>,
        pub(crate) gateway_region: std::option::Option<String>,
        pub(crate) gateway_type: std::option::Option<String>,
        pub(crate) tape_drive_type: std::option::Option<String>,
        pub(crate) medium_changer_type: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// Your gateway activation key, obtained by sending an HTTP GET request with redirects enabled to the gateway IP address.
        pub fn activation_key(mut self, input: impl Into<String>) -> Self {
            self.activation_key = Some(input.into());
            self
        }
        /// Your gateway activation key, obtained by sending an HTTP GET request with redirects enabled to the gateway IP address.
        pub fn set_activation_key(mut self, input: std::option::Option<String>) -> Self {
            self.activation_key = input;
            self
        }
        /// The name you configured for your gateway.
        pub fn gateway_name(mut self, input: impl Into<String>) -> Self {
            self.gateway_name = Some(input.into());
            self
        }
        /// The name you configured for your gateway.
        pub fn set_gateway_name(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_name = input;
            self
        }
        /// A value that indicates the time zone you want to set for the gateway, e.g. `GMT-5:00`.
        pub fn gateway_timezone(mut self, input: impl Into<String>) -> Self {
            self.gateway_timezone = Some(input.into());
            self
        }
        /// A value that indicates the time zone you want to set for the gateway, e.g. `GMT-5:00`.
        pub fn set_gateway_timezone(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_timezone = input;
            self
        }
        /// A value that indicates the AWS Region where you want to store your data.
        pub fn gateway_region(mut self, input: impl Into<String>) -> Self {
            self.gateway_region = Some(input.into());
            self
        }
        /// A value that indicates the AWS Region where you want to store your data.
        pub fn set_gateway_region(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_region = input;
            self
        }
        /// A value that defines the type of gateway to activate. The default value is `CACHED`.
        pub fn gateway_type(mut self, input: impl Into<String>) -> Self {
            self.gateway_type = Some(input.into());
            self
        }
        /// A value that defines the type of gateway to activate. The default value is `CACHED`.
        pub fn set_gateway_type(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_type = input;
            self
        }
        /// The value that indicates the type of tape drive to use for tape gateway.
        pub fn tape_drive_type(mut self, input: impl Into<String>) -> Self {
            self.tape_drive_type = Some(input.into());
            self
        }
        /// The value that indicates the type of tape drive to use for tape gateway.
        pub fn set_tape_drive_type(mut self, input: std::option::Option<String>) -> Self {
            self.tape_drive_type = input;
            self
        }
        /// The value that indicates the type of medium changer to use for tape gateway.
        pub fn medium_changer_type(mut self, input: impl Into<String>) -> Self {
            self.medium_changer_type = Some(input.into());
            self
        }
        /// The value that indicates the type of medium changer to use for tape gateway.
        pub fn set_medium_changer_type(mut self, input: std::option::Option<String>) -> Self {
            self.medium_changer_type = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`ActivateGatewayInput`](crate::input::ActivateGatewayInput).
        pub fn build(self) -> crate::input::ActivateGatewayInput {
            crate::input::ActivateGatewayInput {
                activation_key: self.activation_key,
                gateway_name: self.gateway_name,
                gateway_timezone: self.gateway_timezone,
                gateway_region: self.gateway_region,
                gateway_type: self.gateway_type,
                tape_drive_type: self.tape_drive_type,
                medium_changer_type: self.medium_changer_type,
                tags: self.tags,
            }
        }
    }
}
impl ActivateGatewayInput {
    /// Creates a new builder-style object to manufacture [`ActivateGatewayInput`](crate::input::ActivateGatewayInput).
    pub fn builder() -> crate::input::activate_gateway_input::Builder {
        crate::input::activate_gateway_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::activate_gateway_input::Builder {
        crate::input::activate_gateway_input::Builder {
            activation_key: self.activation_key.clone(),
            gateway_name: self.gateway_name.clone(),
            gateway_timezone: self.gateway_timezone.clone(),
            gateway_region: self.gateway_region.clone(),
            gateway_type: self.gateway_type.clone(),
            tape_drive_type: self.tape_drive_type.clone(),
            medium_changer_type: self.medium_changer_type.clone(),
            tags: self.tags.clone(),
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
impl std::fmt::Display for ActivateGatewayInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for ActivateGatewayInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `CreateNFSFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateNfsFileShareInput {
    /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
    pub client_token: std::option::Option<String>,
    /// File share default values.
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
    /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
    pub gateway_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub role: std::option::Option<String>,
    /// The ARN of the backend storage used for storing file data.
    pub location_arn: std::option::Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub client_list: std::option::Option<std::vec::Vec<String>>,
    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub squash: std::option::Option<String>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateNfsFileShareInput {
    /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// File share default values.
    pub fn nfs_file_share_defaults(&self) -> std::option::Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }

    /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub fn role(&self) -> std::option::Option<&str> {
        self.role.as_deref()
    }

    /// The ARN of the backend storage used for storing file data.
    pub fn location_arn(&self) -> std::option::Option<&str> {
        self.location_arn.as_deref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub fn client_list(&self) -> std::option::Option<&[String]> {
        self.client_list.as_deref()
    }

    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub fn squash(&self) -> std::option::Option<&str> {
        self.squash.as_deref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for CreateNfsFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateNfsFileShareInput");
        formatter.field("client_token", &self.client_token);
        formatter.field("nfs_file_share_defaults", &self.nfs_file_share_defaults);
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("role", &self.role);
        formatter.field("location_arn", &self.location_arn);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("client_list", &self.client_list);
        formatter.field("squash", &self.squash);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput).
pub mod create_nfs_file_share_input {

    /// A builder for [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) client_token: std::option::Option<String>,
        pub(crate) nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) role: std::option::Option<String>,
        pub(crate) location_arn: std::option::Option<String>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) client_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) squash: std::option::Option<String>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
        pub fn set_client_token(mut self, input: std::option::Option<String>) -> Self {
            self.client_token = input;
            self
        }
        /// File share default values.
        pub fn nfs_file_share_defaults(mut self, input: crate::model::NfsFileShareDefaults) -> Self {
            self.nfs_file_share_defaults = Some(input);
            self
        }
        /// File share default values.
        pub fn set_nfs_file_share_defaults(mut self, input: std::option::Option<crate::model::NfsFileShareDefaults>) -> Self {
            self.nfs_file_share_defaults = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn set_role(mut self, input: std::option::Option<String>) -> Self {
            self.role = input;
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn set_location_arn(mut self, input: std::option::Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// Appends an item to `client_list`.
        ///
        /// To override the contents of this collection use [`set_client_list`](Self::set_client_list).
        ///
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn client_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.client_list.unwrap_or_default();
            v.push(input.into());
            self.client_list = Some(v);
            self
        }
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn set_client_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.client_list = input;
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn squash(mut self, input: impl Into<String>) -> Self {
            self.squash = Some(input.into());
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn set_squash(mut self, input: std::option::Option<String>) -> Self {
            self.squash = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput).
        pub fn build(self) -> crate::input::CreateNfsFileShareInput {
            crate::input::CreateNfsFileShareInput {
                client_token: self.client_token,
                nfs_file_share_defaults: self.nfs_file_share_defaults,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                client_list: self.client_list,
                squash: self.squash,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                tags: self.tags,
            }
        }
    }
}
impl CreateNfsFileShareInput {
    /// Creates a new builder-style object to manufacture [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput).
    pub fn builder() -> crate::input::create_nfs_file_share_input::Builder {
        crate::input::create_nfs_file_share_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::create_nfs_file_share_input::Builder {
        crate::input::create_nfs_file_share_input::Builder {
            client_token: self.client_token.clone(),
            nfs_file_share_defaults: self.nfs_file_share_defaults.clone(),
            gateway_arn: self.gateway_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            role: self.role.clone(),
            location_arn: self.location_arn.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            client_list: self.client_list.clone(),
            squash: self.squash.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
            tags: self.tags.clone(),
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
impl std::fmt::Display for CreateNfsFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateNfsFileShareInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `UpdateNFSFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateNfsFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// File share default values.
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub client_list: std::option::Option<std::vec::Vec<String>>,
    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub squash: std::option::Option<String>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
}
impl UpdateNfsFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// File share default values.
    pub fn nfs_file_share_defaults(&self) -> std::option::Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
    pub fn client_list(&self) -> std::option::Option<&[String]> {
        self.client_list.as_deref()
    }

    /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
    pub fn squash(&self) -> std::option::Option<&str> {
        self.squash.as_deref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }
}
impl std::fmt::Debug for UpdateNfsFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateNfsFileShareInput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("nfs_file_share_defaults", &self.nfs_file_share_defaults);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("client_list", &self.client_list);
        formatter.field("squash", &self.squash);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.finish()
    }
}
/// See [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput).
pub mod update_nfs_file_share_input {

    /// A builder for [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) client_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) squash: std::option::Option<String>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
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
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// File share default values.
        pub fn nfs_file_share_defaults(mut self, input: crate::model::NfsFileShareDefaults) -> Self {
            self.nfs_file_share_defaults = Some(input);
            self
        }
        /// File share default values.
        pub fn set_nfs_file_share_defaults(mut self, input: std::option::Option<crate::model::NfsFileShareDefaults>) -> Self {
            self.nfs_file_share_defaults = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// Appends an item to `client_list`.
        ///
        /// To override the contents of this collection use [`set_client_list`](Self::set_client_list).
        ///
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn client_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.client_list.unwrap_or_default();
            v.push(input.into());
            self.client_list = Some(v);
            self
        }
        /// The list of clients that are allowed to access the file gateway. The list must contain either valid IP addresses or valid CIDR blocks.
        pub fn set_client_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.client_list = input;
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn squash(mut self, input: impl Into<String>) -> Self {
            self.squash = Some(input.into());
            self
        }
        /// The user mapped to anonymous user: `RootSquash`, `NoSquash` or `AllSquash`.
        pub fn set_squash(mut self, input: std::option::Option<String>) -> Self {
            self.squash = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput).
        pub fn build(self) -> crate::input::UpdateNfsFileShareInput {
            crate::input::UpdateNfsFileShareInput {
                file_share_arn: self.file_share_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                nfs_file_share_defaults: self.nfs_file_share_defaults,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                client_list: self.client_list,
                squash: self.squash,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
            }
        }
    }
}
impl UpdateNfsFileShareInput {
    /// Creates a new builder-style object to manufacture [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput).
    pub fn builder() -> crate::input::update_nfs_file_share_input::Builder {
        crate::input::update_nfs_file_share_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::update_nfs_file_share_input::Builder {
        crate::input::update_nfs_file_share_input::Builder {
            file_share_arn: self.file_share_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            nfs_file_share_defaults: self.nfs_file_share_defaults.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            client_list: self.client_list.clone(),
            squash: self.squash.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
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
impl std::fmt::Display for UpdateNfsFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for UpdateNfsFileShareInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `CreateSMBFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateSmbFileShareInput {
    /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
    pub client_token: std::option::Option<String>,
    /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
    pub gateway_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub role: std::option::Option<String>,
    /// The ARN of the backend storage used for storing file data.
    pub location_arn: std::option::Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub smbacl_enabled: std::option::Option<bool>,
    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub admin_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub valid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub invalid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub audit_destination_arn: std::option::Option<String>,
    /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
    pub authentication: std::option::Option<String>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateSmbFileShareInput {
    /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
    pub fn client_token(&self) -> std::option::Option<&str> {
        self.client_token.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
    pub fn role(&self) -> std::option::Option<&str> {
        self.role.as_deref()
    }

    /// The ARN of the backend storage used for storing file data.
    pub fn location_arn(&self) -> std::option::Option<&str> {
        self.location_arn.as_deref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }

    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub fn smbacl_enabled(&self) -> std::option::Option<bool> {
        self.smbacl_enabled
    }

    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub fn admin_user_list(&self) -> std::option::Option<&[String]> {
        self.admin_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub fn valid_user_list(&self) -> std::option::Option<&[String]> {
        self.valid_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub fn invalid_user_list(&self) -> std::option::Option<&[String]> {
        self.invalid_user_list.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub fn audit_destination_arn(&self) -> std::option::Option<&str> {
        self.audit_destination_arn.as_deref()
    }

    /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
    pub fn authentication(&self) -> std::option::Option<&str> {
        self.authentication.as_deref()
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for CreateSmbFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSmbFileShareInput");
        formatter.field("client_token", &self.client_token);
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("role", &self.role);
        formatter.field("location_arn", &self.location_arn);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.field("smbacl_enabled", &self.smbacl_enabled);
        formatter.field("admin_user_list", &self.admin_user_list);
        formatter.field("valid_user_list", &self.valid_user_list);
        formatter.field("invalid_user_list", &self.invalid_user_list);
        formatter.field("audit_destination_arn", &self.audit_destination_arn);
        formatter.field("authentication", &self.authentication);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput).
pub mod create_smb_file_share_input {

    /// A builder for [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) client_token: std::option::Option<String>,
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) role: std::option::Option<String>,
        pub(crate) location_arn: std::option::Option<String>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
        pub(crate) smbacl_enabled: std::option::Option<bool>,
        pub(crate) admin_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) valid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) invalid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) audit_destination_arn: std::option::Option<String>,
        pub(crate) authentication: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        /// A unique string value that you supply that is used by file gateway to ensure idempotent file share creation.
        pub fn set_client_token(mut self, input: std::option::Option<String>) -> Self {
            self.client_token = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the file gateway on which you want to create a file share.
        pub fn set_gateway_arn(mut self, input: std::option::Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        /// The ARN of the AWS Identity and Access Management (IAM) role that a file gateway assumes when it accesses the underlying storage.
        pub fn set_role(mut self, input: std::option::Option<String>) -> Self {
            self.role = input;
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        /// The ARN of the backend storage used for storing file data.
        pub fn set_location_arn(mut self, input: std::option::Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn smbacl_enabled(mut self, input: bool) -> Self {
            self.smbacl_enabled = Some(input);
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn set_smbacl_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.smbacl_enabled = input;
            self
        }
        /// Appends an item to `admin_user_list`.
        ///
        /// To override the contents of this collection use [`set_admin_user_list`](Self::set_admin_user_list).
        ///
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn admin_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.admin_user_list.unwrap_or_default();
            v.push(input.into());
            self.admin_user_list = Some(v);
            self
        }
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn set_admin_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.admin_user_list = input;
            self
        }
        /// Appends an item to `valid_user_list`.
        ///
        /// To override the contents of this collection use [`set_valid_user_list`](Self::set_valid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn valid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.valid_user_list.unwrap_or_default();
            v.push(input.into());
            self.valid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn set_valid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.valid_user_list = input;
            self
        }
        /// Appends an item to `invalid_user_list`.
        ///
        /// To override the contents of this collection use [`set_invalid_user_list`](Self::set_invalid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn invalid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.invalid_user_list.unwrap_or_default();
            v.push(input.into());
            self.invalid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn set_invalid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.invalid_user_list = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn audit_destination_arn(mut self, input: impl Into<String>) -> Self {
            self.audit_destination_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn set_audit_destination_arn(mut self, input: std::option::Option<String>) -> Self {
            self.audit_destination_arn = input;
            self
        }
        /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
        pub fn authentication(mut self, input: impl Into<String>) -> Self {
            self.authentication = Some(input.into());
            self
        }
        /// The authentication method of the file share: `ActiveDirectory` or `GuestAccess`.
        pub fn set_authentication(mut self, input: std::option::Option<String>) -> Self {
            self.authentication = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput).
        pub fn build(self) -> crate::input::CreateSmbFileShareInput {
            crate::input::CreateSmbFileShareInput {
                client_token: self.client_token,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                smbacl_enabled: self.smbacl_enabled,
                admin_user_list: self.admin_user_list,
                valid_user_list: self.valid_user_list,
                invalid_user_list: self.invalid_user_list,
                audit_destination_arn: self.audit_destination_arn,
                authentication: self.authentication,
                tags: self.tags,
            }
        }
    }
}
impl CreateSmbFileShareInput {
    /// Creates a new builder-style object to manufacture [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput).
    pub fn builder() -> crate::input::create_smb_file_share_input::Builder {
        crate::input::create_smb_file_share_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::create_smb_file_share_input::Builder {
        crate::input::create_smb_file_share_input::Builder {
            client_token: self.client_token.clone(),
            gateway_arn: self.gateway_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            role: self.role.clone(),
            location_arn: self.location_arn.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
            smbacl_enabled: self.smbacl_enabled.clone(),
            admin_user_list: self.admin_user_list.clone(),
            valid_user_list: self.valid_user_list.clone(),
            invalid_user_list: self.invalid_user_list.clone(),
            audit_destination_arn: self.audit_destination_arn.clone(),
            authentication: self.authentication.clone(),
            tags: self.tags.clone(),
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
impl std::fmt::Display for CreateSmbFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateSmbFileShareInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `UpdateSMBFileShare` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateSmbFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub file_share_arn: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub default_storage_class: std::option::Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,
    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub read_only: std::option::Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub guess_mime_type_enabled: std::option::Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub requester_pays: std::option::Option<bool>,
    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub smbacl_enabled: std::option::Option<bool>,
    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub admin_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub valid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub invalid_user_list: std::option::Option<std::vec::Vec<String>>,
    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub audit_destination_arn: std::option::Option<String>,
}
impl UpdateSmbFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    pub fn file_share_arn(&self) -> std::option::Option<&str> {
        self.file_share_arn.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    pub fn default_storage_class(&self) -> std::option::Option<&str> {
        self.default_storage_class.as_deref()
    }

    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
    pub fn object_acl(&self) -> std::option::Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }

    /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
    pub fn read_only(&self) -> std::option::Option<bool> {
        self.read_only
    }

    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    pub fn guess_mime_type_enabled(&self) -> std::option::Option<bool> {
        self.guess_mime_type_enabled
    }

    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    pub fn requester_pays(&self) -> std::option::Option<bool> {
        self.requester_pays
    }

    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    pub fn smbacl_enabled(&self) -> std::option::Option<bool> {
        self.smbacl_enabled
    }

    /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
    pub fn admin_user_list(&self) -> std::option::Option<&[String]> {
        self.admin_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    pub fn valid_user_list(&self) -> std::option::Option<&[String]> {
        self.valid_user_list.as_deref()
    }

    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    pub fn invalid_user_list(&self) -> std::option::Option<&[String]> {
        self.invalid_user_list.as_deref()
    }

    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    pub fn audit_destination_arn(&self) -> std::option::Option<&str> {
        self.audit_destination_arn.as_deref()
    }
}
impl std::fmt::Debug for UpdateSmbFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateSmbFileShareInput");
        formatter.field("file_share_arn", &self.file_share_arn);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("default_storage_class", &self.default_storage_class);
        formatter.field("object_acl", &self.object_acl);
        formatter.field("read_only", &self.read_only);
        formatter.field("guess_mime_type_enabled", &self.guess_mime_type_enabled);
        formatter.field("requester_pays", &self.requester_pays);
        formatter.field("smbacl_enabled", &self.smbacl_enabled);
        formatter.field("admin_user_list", &self.admin_user_list);
        formatter.field("valid_user_list", &self.valid_user_list);
        formatter.field("invalid_user_list", &self.invalid_user_list);
        formatter.field("audit_destination_arn", &self.audit_destination_arn);
        formatter.finish()
    }
}
/// See [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput).
pub mod update_smb_file_share_input {

    /// A builder for [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) default_storage_class: std::option::Option<String>,
        pub(crate) object_acl: std::option::Option<crate::model::ObjectAcl>,
        pub(crate) read_only: std::option::Option<bool>,
        pub(crate) guess_mime_type_enabled: std::option::Option<bool>,
        pub(crate) requester_pays: std::option::Option<bool>,
        pub(crate) smbacl_enabled: std::option::Option<bool>,
        pub(crate) admin_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) valid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) invalid_user_list: std::option::Option<std::vec::Vec<String>>,
        pub(crate) audit_destination_arn: std::option::Option<String>,
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
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
        pub fn set_default_storage_class(mut self, input: std::option::Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn object_acl(mut self, input: impl Into<crate::model::ObjectAcl>) -> Self {
            self.object_acl = Some(input.into());
            self
        }
        /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into. The default value is `private`.
        pub fn set_object_acl(mut self, input: std::option::Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        /// A value that sets the write status of a file share. This value is true if the write status is read-only, and otherwise false.
        pub fn set_read_only(mut self, input: std::option::Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
        pub fn set_guess_mime_type_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
        pub fn set_requester_pays(mut self, input: std::option::Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn smbacl_enabled(mut self, input: bool) -> Self {
            self.smbacl_enabled = Some(input);
            self
        }
        /// Set this value to true to enable access control list (ACL) on the SMB file share.
        pub fn set_smbacl_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.smbacl_enabled = input;
            self
        }
        /// Appends an item to `admin_user_list`.
        ///
        /// To override the contents of this collection use [`set_admin_user_list`](Self::set_admin_user_list).
        ///
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn admin_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.admin_user_list.unwrap_or_default();
            v.push(input.into());
            self.admin_user_list = Some(v);
            self
        }
        /// A list of users in the Active Directory that will be granted administrator privileges on the file share.
        pub fn set_admin_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.admin_user_list = input;
            self
        }
        /// Appends an item to `valid_user_list`.
        ///
        /// To override the contents of this collection use [`set_valid_user_list`](Self::set_valid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn valid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.valid_user_list.unwrap_or_default();
            v.push(input.into());
            self.valid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are allowed to access the file share.
        pub fn set_valid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.valid_user_list = input;
            self
        }
        /// Appends an item to `invalid_user_list`.
        ///
        /// To override the contents of this collection use [`set_invalid_user_list`](Self::set_invalid_user_list).
        ///
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn invalid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.invalid_user_list.unwrap_or_default();
            v.push(input.into());
            self.invalid_user_list = Some(v);
            self
        }
        /// A list of users or groups in the Active Directory that are not allowed to access the file share.
        pub fn set_invalid_user_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.invalid_user_list = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn audit_destination_arn(mut self, input: impl Into<String>) -> Self {
            self.audit_destination_arn = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
        pub fn set_audit_destination_arn(mut self, input: std::option::Option<String>) -> Self {
            self.audit_destination_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput).
        pub fn build(self) -> crate::input::UpdateSmbFileShareInput {
            crate::input::UpdateSmbFileShareInput {
                file_share_arn: self.file_share_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                smbacl_enabled: self.smbacl_enabled,
                admin_user_list: self.admin_user_list,
                valid_user_list: self.valid_user_list,
                invalid_user_list: self.invalid_user_list,
                audit_destination_arn: self.audit_destination_arn,
            }
        }
    }
}
impl UpdateSmbFileShareInput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput).
    pub fn builder() -> crate::input::update_smb_file_share_input::Builder {
        crate::input::update_smb_file_share_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::update_smb_file_share_input::Builder {
        crate::input::update_smb_file_share_input::Builder {
            file_share_arn: self.file_share_arn.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            default_storage_class: self.default_storage_class.clone(),
            object_acl: self.object_acl.clone(),
            read_only: self.read_only.clone(),
            guess_mime_type_enabled: self.guess_mime_type_enabled.clone(),
            requester_pays: self.requester_pays.clone(),
            smbacl_enabled: self.smbacl_enabled.clone(),
            admin_user_list: self.admin_user_list.clone(),
            valid_user_list: self.valid_user_list.clone(),
            invalid_user_list: self.invalid_user_list.clone(),
            audit_destination_arn: self.audit_destination_arn.clone(),
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
impl std::fmt::Display for UpdateSmbFileShareInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for UpdateSmbFileShareInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `DescribeNFSFileShares` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeNfsFileSharesInput {
    /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
    pub file_share_arn_list: std::option::Option<std::vec::Vec<String>>,
}
impl DescribeNfsFileSharesInput {
    /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
    pub fn file_share_arn_list(&self) -> std::option::Option<&[String]> {
        self.file_share_arn_list.as_deref()
    }
}
impl std::fmt::Debug for DescribeNfsFileSharesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeNfsFileSharesInput");
        formatter.field("file_share_arn_list", &self.file_share_arn_list);
        formatter.finish()
    }
}
/// See [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput).
pub mod describe_nfs_file_shares_input {

    /// A builder for [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn_list: std::option::Option<std::vec::Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `file_share_arn_list`.
        ///
        /// To override the contents of this collection use [`set_file_share_arn_list`](Self::set_file_share_arn_list).
        ///
        /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
        pub fn file_share_arn_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.file_share_arn_list.unwrap_or_default();
            v.push(input.into());
            self.file_share_arn_list = Some(v);
            self
        }
        /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
        pub fn set_file_share_arn_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.file_share_arn_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput).
        pub fn build(self) -> crate::input::DescribeNfsFileSharesInput {
            crate::input::DescribeNfsFileSharesInput {
                file_share_arn_list: self.file_share_arn_list,
            }
        }
    }
}
impl DescribeNfsFileSharesInput {
    /// Creates a new builder-style object to manufacture [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput).
    pub fn builder() -> crate::input::describe_nfs_file_shares_input::Builder {
        crate::input::describe_nfs_file_shares_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::describe_nfs_file_shares_input::Builder {
        crate::input::describe_nfs_file_shares_input::Builder {
            file_share_arn_list: self.file_share_arn_list.clone(),
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
impl std::fmt::Display for DescribeNfsFileSharesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeNfsFileSharesInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `DescribeSMBFileShares` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeSmbFileSharesInput {
    /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
    pub file_share_arn_list: std::option::Option<std::vec::Vec<String>>,
}
impl DescribeSmbFileSharesInput {
    /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
    pub fn file_share_arn_list(&self) -> std::option::Option<&[String]> {
        self.file_share_arn_list.as_deref()
    }
}
impl std::fmt::Debug for DescribeSmbFileSharesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeSmbFileSharesInput");
        formatter.field("file_share_arn_list", &self.file_share_arn_list);
        formatter.finish()
    }
}
/// See [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput).
pub mod describe_smb_file_shares_input {

    /// A builder for [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn_list: std::option::Option<std::vec::Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `file_share_arn_list`.
        ///
        /// To override the contents of this collection use [`set_file_share_arn_list`](Self::set_file_share_arn_list).
        ///
        /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
        pub fn file_share_arn_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.file_share_arn_list.unwrap_or_default();
            v.push(input.into());
            self.file_share_arn_list = Some(v);
            self
        }
        /// An array containing the Amazon Resource Name (ARN) of each file share to be described.
        pub fn set_file_share_arn_list(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.file_share_arn_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput).
        pub fn build(self) -> crate::input::DescribeSmbFileSharesInput {
            crate::input::DescribeSmbFileSharesInput {
                file_share_arn_list: self.file_share_arn_list,
            }
        }
    }
}
impl DescribeSmbFileSharesInput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput).
    pub fn builder() -> crate::input::describe_smb_file_shares_input::Builder {
        crate::input::describe_smb_file_shares_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::describe_smb_file_shares_input::Builder {
        crate::input::describe_smb_file_shares_input::Builder {
            file_share_arn_list: self.file_share_arn_list.clone(),
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
impl std::fmt::Display for DescribeSmbFileSharesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeSmbFileSharesInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `CreateStorediSCSIVolume` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct CreateStorediScsiVolumeInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// The unique identifier for the gateway local disk that is configured as a stored volume.
    pub disk_id: std::option::Option<String>,
    /// The snapshot ID of the snapshot to restore as the new stored volume.
    pub snapshot_id: std::option::Option<String>,
    /// Set to true if you want to preserve the data on the local disk.
    pub preserve_existing_data: std::option::Option<bool>,
    /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
    pub target_name: std::option::Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    pub network_interface_id: std::option::Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub kms_encrypted: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub kms_key: std::option::Option<String>,
    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateStorediScsiVolumeInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// The unique identifier for the gateway local disk that is configured as a stored volume.
    pub fn disk_id(&self) -> std::option::Option<&str> {
        self.disk_id.as_deref()
    }

    /// The snapshot ID of the snapshot to restore as the new stored volume.
    pub fn snapshot_id(&self) -> std::option::Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// Set to true if you want to preserve the data on the local disk.
    pub fn preserve_existing_data(&self) -> std::option::Option<bool> {
        self.preserve_existing_data
    }

    /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
    pub fn target_name(&self) -> std::option::Option<&str> {
        self.target_name.as_deref()
    }

    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
    pub fn kms_encrypted(&self) -> std::option::Option<bool> {
        self.kms_encrypted
    }

    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    pub fn kms_key(&self) -> std::option::Option<&str> {
        self.kms_key.as_deref()
    }

    /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for CreateStorediScsiVolumeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateStorediScsiVolumeInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("disk_id", &self.disk_id);
        formatter.field("snapshot_id", &self.snapshot_id);
        formatter.field("preserve_existing_data", &self.preserve_existing_data);
        formatter.field("target_name", &self.target_name);
        formatter.field("network_interface_id", &self.network_interface_id);
        formatter.field("kms_encrypted", &self.kms_encrypted);
        formatter.field("kms_key", &self.kms_key);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput).
pub mod create_storedi_scsi_volume_input {

    /// A builder for [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) disk_id: std::option::Option<String>,
        pub(crate) snapshot_id: std::option::Option<String>,
        pub(crate) preserve_existing_data: std::option::Option<bool>,
        pub(crate) target_name: std::option::Option<String>,
        pub(crate) network_interface_id: std::option::Option<String>,
        pub(crate) kms_encrypted: std::option::Option<bool>,
        pub(crate) kms_key: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        /// The unique identifier for the gateway local disk that is configured as a stored volume.
        pub fn disk_id(mut self, input: impl Into<String>) -> Self {
            self.disk_id = Some(input.into());
            self
        }
        /// The unique identifier for the gateway local disk that is configured as a stored volume.
        pub fn set_disk_id(mut self, input: std::option::Option<String>) -> Self {
            self.disk_id = input;
            self
        }
        /// The snapshot ID of the snapshot to restore as the new stored volume.
        pub fn snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        /// The snapshot ID of the snapshot to restore as the new stored volume.
        pub fn set_snapshot_id(mut self, input: std::option::Option<String>) -> Self {
            self.snapshot_id = input;
            self
        }
        /// Set to true if you want to preserve the data on the local disk.
        pub fn preserve_existing_data(mut self, input: bool) -> Self {
            self.preserve_existing_data = Some(input);
            self
        }
        /// Set to true if you want to preserve the data on the local disk.
        pub fn set_preserve_existing_data(mut self, input: std::option::Option<bool>) -> Self {
            self.preserve_existing_data = input;
            self
        }
        /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        /// The name of the iSCSI target used by an initiator to connect to a volume and used as a suffix for the target ARN.
        pub fn set_target_name(mut self, input: std::option::Option<String>) -> Self {
            self.target_name = input;
            self
        }
        /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
        pub fn set_network_interface_id(mut self, input: std::option::Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3.
        pub fn set_kms_encrypted(mut self, input: std::option::Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
        pub fn set_kms_key(mut self, input: std::option::Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// A list of up to 50 tags that can be assigned to the resource. Each tag is a key-value pair.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput).
        pub fn build(self) -> crate::input::CreateStorediScsiVolumeInput {
            crate::input::CreateStorediScsiVolumeInput {
                gateway_arn: self.gateway_arn,
                disk_id: self.disk_id,
                snapshot_id: self.snapshot_id,
                preserve_existing_data: self.preserve_existing_data,
                target_name: self.target_name,
                network_interface_id: self.network_interface_id,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                tags: self.tags,
            }
        }
    }
}
impl CreateStorediScsiVolumeInput {
    /// Creates a new builder-style object to manufacture [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput).
    pub fn builder() -> crate::input::create_storedi_scsi_volume_input::Builder {
        crate::input::create_storedi_scsi_volume_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::create_storedi_scsi_volume_input::Builder {
        crate::input::create_storedi_scsi_volume_input::Builder {
            gateway_arn: self.gateway_arn.clone(),
            disk_id: self.disk_id.clone(),
            snapshot_id: self.snapshot_id.clone(),
            preserve_existing_data: self.preserve_existing_data.clone(),
            target_name: self.target_name.clone(),
            network_interface_id: self.network_interface_id.clone(),
            kms_encrypted: self.kms_encrypted.clone(),
            kms_key: self.kms_key.clone(),
            tags: self.tags.clone(),
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
impl std::fmt::Display for CreateStorediScsiVolumeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for CreateStorediScsiVolumeInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `DescribeStorediSCSIVolumes` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeStorediScsiVolumesInput {
    /// An array of strings where each string represents the Amazon Resource Name (ARN) of a stored volume.
    pub volume_arns: std::option::Option<std::vec::Vec<String>>,
}
impl DescribeStorediScsiVolumesInput {
    /// An array of strings where each string represents the Amazon Resource Name (ARN) of a stored volume.
    pub fn volume_arns(&self) -> std::option::Option<&[String]> {
        self.volume_arns.as_deref()
    }
}
impl std::fmt::Debug for DescribeStorediScsiVolumesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeStorediScsiVolumesInput");
        formatter.field("volume_arns", &self.volume_arns);
        formatter.finish()
    }
}
/// See [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput).
pub mod describe_storedi_scsi_volumes_input {

    /// A builder for [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arns: std::option::Option<std::vec::Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `volume_arns`.
        ///
        /// To override the contents of this collection use [`set_volume_arns`](Self::set_volume_arns).
        ///
        /// An array of strings where each string represents the Amazon Resource Name (ARN) of a stored volume.
        pub fn volume_arns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.volume_arns.unwrap_or_default();
            v.push(input.into());
            self.volume_arns = Some(v);
            self
        }
        /// An array of strings where each string represents the Amazon Resource Name (ARN) of a stored volume.
        pub fn set_volume_arns(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.volume_arns = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput).
        pub fn build(self) -> crate::input::DescribeStorediScsiVolumesInput {
            crate::input::DescribeStorediScsiVolumesInput {
                volume_arns: self.volume_arns,
            }
        }
    }
}
impl DescribeStorediScsiVolumesInput {
    /// Creates a new builder-style object to manufacture [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput).
    pub fn builder() -> crate::input::describe_storedi_scsi_volumes_input::Builder {
        crate::input::describe_storedi_scsi_volumes_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::describe_storedi_scsi_volumes_input::Builder {
        crate::input::describe_storedi_scsi_volumes_input::Builder {
            volume_arns: self.volume_arns.clone(),
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
impl std::fmt::Display for DescribeStorediScsiVolumesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeStorediScsiVolumesInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `DescribeCache` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeCacheInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
}
impl DescribeCacheInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }
}
impl std::fmt::Debug for DescribeCacheInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeCacheInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.finish()
    }
}
/// See [`DescribeCacheInput`](crate::input::DescribeCacheInput).
pub mod describe_cache_input {

    /// A builder for [`DescribeCacheInput`](crate::input::DescribeCacheInput).
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
        /// Consumes the builder and constructs a [`DescribeCacheInput`](crate::input::DescribeCacheInput).
        pub fn build(self) -> crate::input::DescribeCacheInput {
            crate::input::DescribeCacheInput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DescribeCacheInput {
    /// Creates a new builder-style object to manufacture [`DescribeCacheInput`](crate::input::DescribeCacheInput).
    pub fn builder() -> crate::input::describe_cache_input::Builder {
        crate::input::describe_cache_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::describe_cache_input::Builder {
        crate::input::describe_cache_input::Builder {
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
impl std::fmt::Display for DescribeCacheInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeCacheInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `JoinDomain` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct JoinDomainInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// The name of the domain that you want the gateway to join.
    pub domain_name: std::option::Option<String>,
    /// The organizational unit (OU) is a container in an Active Directory that can hold users, groups, computers, and other OUs.
    pub organizational_unit: std::option::Option<String>,
    /// List of IPv4 addresses, NetBIOS names, or host names of your domain server. If you need to specify the port number include it after the colon (":").
    pub domain_controllers: std::option::Option<std::vec::Vec<String>>,
    /// Specifies the time in seconds, in which the `JoinDomain` operation must complete. The default is 20 seconds.
    pub timeout_in_seconds: std::option::Option<i32>,
    /// Sets the user name of user who has permission to add the gateway to the Active Directory domain.
    pub user_name: std::option::Option<String>,
    /// Sets the password of the user who has permission to add the gateway to the Active Directory domain.
    pub password: std::option::Option<String>,
}
impl JoinDomainInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// The name of the domain that you want the gateway to join.
    pub fn domain_name(&self) -> std::option::Option<&str> {
        self.domain_name.as_deref()
    }

    /// The organizational unit (OU) is a container in an Active Directory that can hold users, groups, computers, and other OUs.
    pub fn organizational_unit(&self) -> std::option::Option<&str> {
        self.organizational_unit.as_deref()
    }

    /// List of IPv4 addresses, NetBIOS names, or host names of your domain server. If you need to specify the port number include it after the colon (":").
    pub fn domain_controllers(&self) -> std::option::Option<&[String]> {
        self.domain_controllers.as_deref()
    }

    /// Specifies the time in seconds, in which the `JoinDomain` operation must complete. The default is 20 seconds.
    pub fn timeout_in_seconds(&self) -> std::option::Option<i32> {
        self.timeout_in_seconds
    }

    /// Sets the user name of user who has permission to add the gateway to the Active Directory domain.
    pub fn user_name(&self) -> std::option::Option<&str> {
        self.user_name.as_deref()
    }

    /// Sets the password of the user who has permission to add the gateway to the Active Directory domain.
    pub fn password(&self) -> std::option::Option<&str> {
        self.password.as_deref()
    }
}
impl std::fmt::Debug for JoinDomainInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JoinDomainInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("domain_name", &self.domain_name);
        formatter.field("organizational_unit", &self.organizational_unit);
        formatter.field("domain_controllers", &self.domain_controllers);
        formatter.field("timeout_in_seconds", &self.timeout_in_seconds);
        formatter.field("user_name", &self.user_name);
        formatter.field("password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`JoinDomainInput`](crate::input::JoinDomainInput).
pub mod join_domain_input {

    /// A builder for [`JoinDomainInput`](crate::input::JoinDomainInput).
    #[derive(Default, Clone, PartialEq)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) domain_name: std::option::Option<String>,
        pub(crate) organizational_unit: std::option::Option<String>,
        pub(crate) domain_controllers: std::option::Option<std::vec::Vec<String>>,
        pub(crate) timeout_in_seconds: std::option::Option<i32>,
        pub(crate) user_name: std::option::Option<String>,
        pub(crate) password: std::option::Option<String>,
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
        /// The name of the domain that you want the gateway to join.
        pub fn domain_name(mut self, input: impl Into<String>) -> Self {
            self.domain_name = Some(input.into());
            self
        }
        /// The name of the domain that you want the gateway to join.
        pub fn set_domain_name(mut self, input: std::option::Option<String>) -> Self {
            self.domain_name = input;
            self
        }
        /// The organizational unit (OU) is a container in an Active Directory that can hold users, groups, computers, and other OUs.
        pub fn organizational_unit(mut self, input: impl Into<String>) -> Self {
            self.organizational_unit = Some(input.into());
            self
        }
        /// The organizational unit (OU) is a container in an Active Directory that can hold users, groups, computers, and other OUs.
        pub fn set_organizational_unit(mut self, input: std::option::Option<String>) -> Self {
            self.organizational_unit = input;
            self
        }
        /// Appends an item to `domain_controllers`.
        ///
        /// To override the contents of this collection use [`set_domain_controllers`](Self::set_domain_controllers).
        ///
        /// List of IPv4 addresses, NetBIOS names, or host names of your domain server. If you need to specify the port number include it after the colon (":").
        pub fn domain_controllers(mut self, input: impl Into<String>) -> Self {
            let mut v = self.domain_controllers.unwrap_or_default();
            v.push(input.into());
            self.domain_controllers = Some(v);
            self
        }
        /// List of IPv4 addresses, NetBIOS names, or host names of your domain server. If you need to specify the port number include it after the colon (":").
        pub fn set_domain_controllers(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.domain_controllers = input;
            self
        }
        /// Specifies the time in seconds, in which the `JoinDomain` operation must complete. The default is 20 seconds.
        pub fn timeout_in_seconds(mut self, input: i32) -> Self {
            self.timeout_in_seconds = Some(input);
            self
        }
        /// Specifies the time in seconds, in which the `JoinDomain` operation must complete. The default is 20 seconds.
        pub fn set_timeout_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_in_seconds = input;
            self
        }
        /// Sets the user name of user who has permission to add the gateway to the Active Directory domain.
        pub fn user_name(mut self, input: impl Into<String>) -> Self {
            self.user_name = Some(input.into());
            self
        }
        /// Sets the user name of user who has permission to add the gateway to the Active Directory domain.
        pub fn set_user_name(mut self, input: std::option::Option<String>) -> Self {
            self.user_name = input;
            self
        }
        /// Sets the password of the user who has permission to add the gateway to the Active Directory domain.
        pub fn password(mut self, input: impl Into<String>) -> Self {
            self.password = Some(input.into());
            self
        }
        /// Sets the password of the user who has permission to add the gateway to the Active Directory domain.
        pub fn set_password(mut self, input: std::option::Option<String>) -> Self {
            self.password = input;
            self
        }
        /// Consumes the builder and constructs a [`JoinDomainInput`](crate::input::JoinDomainInput).
        pub fn build(self) -> crate::input::JoinDomainInput {
            crate::input::JoinDomainInput {
                gateway_arn: self.gateway_arn,
                domain_name: self.domain_name,
                organizational_unit: self.organizational_unit,
                domain_controllers: self.domain_controllers,
                timeout_in_seconds: self.timeout_in_seconds,
                user_name: self.user_name,
                password: self.password,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("gateway_arn", &self.gateway_arn);
            formatter.field("domain_name", &self.domain_name);
            formatter.field("organizational_unit", &self.organizational_unit);
            formatter.field("domain_controllers", &self.domain_controllers);
            formatter.field("timeout_in_seconds", &self.timeout_in_seconds);
            formatter.field("user_name", &self.user_name);
            formatter.field("password", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}
impl JoinDomainInput {
    /// Creates a new builder-style object to manufacture [`JoinDomainInput`](crate::input::JoinDomainInput).
    pub fn builder() -> crate::input::join_domain_input::Builder {
        crate::input::join_domain_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::join_domain_input::Builder {
        crate::input::join_domain_input::Builder {
            gateway_arn: self.gateway_arn.clone(),
            domain_name: self.domain_name.clone(),
            organizational_unit: self.organizational_unit.clone(),
            domain_controllers: self.domain_controllers.clone(),
            timeout_in_seconds: self.timeout_in_seconds.clone(),
            user_name: self.user_name.clone(),
            password: self.password.clone(),
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
impl std::fmt::Display for JoinDomainInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for JoinDomainInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `DescribeTapes` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct DescribeTapesInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub gateway_arn: std::option::Option<String>,
    /// Specifies one or more unique Amazon Resource Names (ARNs) that represent the virtual tapes you want to describe.
    pub tape_arns: std::option::Option<std::vec::Vec<String>>,
    /// A marker value, obtained in a previous call to `DescribeTapes`. This marker indicates which page of results to retrieve.
    pub marker: std::option::Option<String>,
    /// Specifies that the number of virtual tapes described be limited to the specified number.
    pub limit: std::option::Option<i32>,
}
impl DescribeTapesInput {
    /// The Amazon Resource Name (ARN) of the gateway.
    pub fn gateway_arn(&self) -> std::option::Option<&str> {
        self.gateway_arn.as_deref()
    }

    /// Specifies one or more unique Amazon Resource Names (ARNs) that represent the virtual tapes you want to describe.
    pub fn tape_arns(&self) -> std::option::Option<&[String]> {
        self.tape_arns.as_deref()
    }

    /// A marker value, obtained in a previous call to `DescribeTapes`. This marker indicates which page of results to retrieve.
    pub fn marker(&self) -> std::option::Option<&str> {
        self.marker.as_deref()
    }

    /// Specifies that the number of virtual tapes described be limited to the specified number.
    pub fn limit(&self) -> std::option::Option<i32> {
        self.limit
    }
}
impl std::fmt::Debug for DescribeTapesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeTapesInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("tape_arns", &self.tape_arns);
        formatter.field("marker", &self.marker);
        formatter.field("limit", &self.limit);
        formatter.finish()
    }
}
/// See [`DescribeTapesInput`](crate::input::DescribeTapesInput).
pub mod describe_tapes_input {

    /// A builder for [`DescribeTapesInput`](crate::input::DescribeTapesInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: std::option::Option<String>,
        pub(crate) tape_arns: std::option::Option<std::vec::Vec<String>>,
        pub(crate) marker: std::option::Option<String>,
        pub(crate) limit: std::option::Option<i32>,
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
        /// Appends an item to `tape_arns`.
        ///
        /// To override the contents of this collection use [`set_tape_arns`](Self::set_tape_arns).
        ///
        /// Specifies one or more unique Amazon Resource Names (ARNs) that represent the virtual tapes you want to describe.
        pub fn tape_arns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.tape_arns.unwrap_or_default();
            v.push(input.into());
            self.tape_arns = Some(v);
            self
        }
        /// Specifies one or more unique Amazon Resource Names (ARNs) that represent the virtual tapes you want to describe.
        pub fn set_tape_arns(mut self, input: std::option::Option<std::vec::Vec<String>>) -> Self {
            self.tape_arns = input;
            self
        }
        /// A marker value, obtained in a previous call to `DescribeTapes`. This marker indicates which page of results to retrieve.
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        /// A marker value, obtained in a previous call to `DescribeTapes`. This marker indicates which page of results to retrieve.
        pub fn set_marker(mut self, input: std::option::Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Specifies that the number of virtual tapes described be limited to the specified number.
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        /// Specifies that the number of virtual tapes described be limited to the specified number.
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTapesInput`](crate::input::DescribeTapesInput).
        pub fn build(self) -> crate::input::DescribeTapesInput {
            crate::input::DescribeTapesInput {
                gateway_arn: self.gateway_arn,
                tape_arns: self.tape_arns,
                marker: self.marker,
                limit: self.limit,
            }
        }
    }
}
impl DescribeTapesInput {
    /// Creates a new builder-style object to manufacture [`DescribeTapesInput`](crate::input::DescribeTapesInput).
    pub fn builder() -> crate::input::describe_tapes_input::Builder {
        crate::input::describe_tapes_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::describe_tapes_input::Builder {
        crate::input::describe_tapes_input::Builder {
            gateway_arn: self.gateway_arn.clone(),
            tape_arns: self.tape_arns.clone(),
            marker: self.marker.clone(),
            limit: self.limit.clone(),
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
impl std::fmt::Display for DescribeTapesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for DescribeTapesInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Input for the `AddTagsToResource` operation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub struct AddTagsToResourceInput {
    /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
    pub resource_arn: std::option::Option<String>,
    /// The key-value pair that represents the tag you want to add to the resource. The value can be an empty string.
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl AddTagsToResourceInput {
    /// The Amazon Resource Name (ARN) of the resource you want to add tags to.
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }

    /// The key-value pair that represents the tag you want to add to the resource. The value can be an empty string.
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Debug for AddTagsToResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddTagsToResourceInput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
pub mod add_tags_to_resource_input {

    /// A builder for [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// The key-value pair that represents the tag you want to add to the resource. The value can be an empty string.
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// The key-value pair that represents the tag you want to add to the resource. The value can be an empty string.
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
        pub fn build(self) -> crate::input::AddTagsToResourceInput {
            crate::input::AddTagsToResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}
impl AddTagsToResourceInput {
    /// Creates a new builder-style object to manufacture [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput).
    pub fn builder() -> crate::input::add_tags_to_resource_input::Builder {
        crate::input::add_tags_to_resource_input::Builder::default()
    }

    /// Creates a builder seeded with the values of this shape.
    pub fn to_builder(&self) -> crate::input::add_tags_to_resource_input::Builder {
        crate::input::add_tags_to_resource_input::Builder {
            resource_arn: self.resource_arn.clone(),
            tags: self.tags.clone(),
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
impl std::fmt::Display for AddTagsToResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&aws_smithy_schema::render::render(self))
    }
}
impl std::hash::Hash for AddTagsToResourceInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}
