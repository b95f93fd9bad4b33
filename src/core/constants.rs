//! Fixed names, exit codes and templates shared across the crate

/// Exit status used when the configuration itself is invalid
pub const INVALID_CONFIG_RC: i32 = 3;

/// Manifest marking the project as a collection
pub const GALAXY_MANIFEST: &str = "galaxy.yml";

/// Role metadata file, relative to the project root
pub const ROLE_META: &str = "meta/main.yml";

/// Config file looked up in the project root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = ".ansible-lint";

/// Directory names of the simulated install tree
pub const MODULES_DIR: &str = "modules";
pub const ROLES_DIR: &str = "roles";
pub const COLLECTIONS_DIR: &str = "collections";
pub const COLLECTIONS_NS_DIR: &str = "ansible_collections";

/// Placeholder module source. Substitutions: `{name}`, `{namespace}`, `{collection}`.
pub const MOCKED_MODULE_TEMPLATE: &str = r#"# This is a mocked Ansible module generated by lintmock
# namespace: {namespace}
# collection: {collection}
from ansible.module_utils.basic import AnsibleModule

DOCUMENTATION = '''
module: {name}

short_description: Mocked
version_added: "1.0.0"
description: Mocked

author:
  - lintmock (@nobody)
'''
EXAMPLES = '''mocked'''
RETURN = '''mocked'''


def main():
    result = dict(
        changed=False,
        original_message='',
        message='')

    module = AnsibleModule(
        argument_spec=dict(),
        supports_check_mode=True,
    )
    module.exit_json(**result)


if __name__ == "__main__":
    main()
"#;
