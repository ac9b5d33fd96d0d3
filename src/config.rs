use crate::context::Context;
use crate::error::GenerateError;
use crate::prompt::Prompter;
use crate::traits::HostInfo;
use anyhow::Result;
use serde::Serialize;

/// Starting values for every prompt, plus the fixed network bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VagrantDefaults {
    pub box_image: &'static str,
    pub hostname: &'static str,
    pub memory_mb: i64,
    /// Also the CPU count the host must exceed before any prompt is shown
    pub cpu_count: i64,
    pub private_network_enabled: bool,
    pub public_network_enabled: bool,
    pub private_network_base: &'static str,
    pub private_default_octet: &'static str,
    pub public_network_base: &'static str,
    pub public_default_octet: &'static str,
}

pub const STANDARD_DEFAULTS: VagrantDefaults = VagrantDefaults {
    box_image: "ubuntu/jammy64",
    hostname: "gogrant-box",
    memory_mb: 1024,
    cpu_count: 2,
    private_network_enabled: true,
    public_network_enabled: false,
    private_network_base: "192.168.56",
    private_default_octet: "100",
    public_network_base: "192.168.1",
    public_default_octet: "50",
};

/// Validated values collected in one session, fed to the Vagrantfile template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VagrantConfig {
    pub box_image: String,
    pub hostname: String,
    pub memory_mb: i64,
    pub cpu_count: i64,
    pub private_network_enabled: bool,
    pub private_network_address: Option<String>,
    pub public_network_enabled: bool,
    pub public_network_address: Option<String>,
    pub private_network_base: String,
    pub public_network_base: String,
}

/// Runs the fixed prompt sequence that produces a [`VagrantConfig`]
pub struct ConfigAssembler;

impl ConfigAssembler {
    /// Fail unless the host has strictly more CPUs than the default CPU count.
    ///
    /// Checks the default count, not the one the user types later, and runs
    /// before any prompt is shown.
    pub fn preflight(host: &dyn HostInfo, defaults: &VagrantDefaults) -> Result<(), GenerateError> {
        let available = host.available_cpus();
        let required = defaults.cpu_count;

        // Signed comparison: a zero or negative default always passes
        if required >= available as i64 {
            return Err(GenerateError::InsufficientCpus {
                required,
                available,
            });
        }

        Ok(())
    }

    /// Run the preflight check and then every prompt, in order
    pub fn assemble(ctx: &Context, defaults: &VagrantDefaults) -> Result<VagrantConfig> {
        Self::preflight(&*ctx.host, defaults)?;

        let prompter = Prompter::new(&*ctx.input, &*ctx.output);

        let box_image = prompter.string("Box image name", defaults.box_image)?;
        let hostname = prompter.string("Hostname", defaults.hostname)?;
        let memory_mb = prompter.integer("Memory (MB)", defaults.memory_mb)?;
        let cpu_count = prompter.integer("CPU count", defaults.cpu_count)?;

        let private_network_enabled = prompter.boolean(
            "Enable private network? (y/N)",
            defaults.private_network_enabled,
        )?;
        let private_network_address = if private_network_enabled {
            Some(prompter.network_address(
                "Private network IP",
                defaults.private_network_base,
                defaults.private_default_octet,
            )?)
        } else {
            None
        };

        let public_network_enabled = prompter.boolean(
            "Enable public network? (y/N)",
            defaults.public_network_enabled,
        )?;
        let public_network_address = if public_network_enabled {
            Some(prompter.network_address(
                "Public network IP",
                defaults.public_network_base,
                defaults.public_default_octet,
            )?)
        } else {
            None
        };

        Ok(VagrantConfig {
            box_image,
            hostname,
            memory_mb,
            cpu_count,
            private_network_enabled,
            private_network_address,
            public_network_enabled,
            public_network_address,
            private_network_base: defaults.private_network_base.to_string(),
            public_network_base: defaults.public_network_base.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FixedHostInfo, MockFileSystem, MockLineReader, MockOutput};
    use std::sync::Arc;

    fn create_test_context(input: &str, cpus: usize) -> (Context, Arc<MockLineReader>, Arc<MockOutput>) {
        let reader = Arc::new(MockLineReader::from_input(input));
        let output = Arc::new(MockOutput::new());
        let ctx = Context {
            fs: Arc::new(MockFileSystem::new()),
            input: reader.clone(),
            output: output.clone(),
            host: Arc::new(FixedHostInfo::new(cpus)),
        };
        (ctx, reader, output)
    }

    fn default_record() -> VagrantConfig {
        VagrantConfig {
            box_image: "ubuntu/jammy64".to_string(),
            hostname: "gogrant-box".to_string(),
            memory_mb: 1024,
            cpu_count: 2,
            private_network_enabled: true,
            private_network_address: Some("192.168.56.100".to_string()),
            public_network_enabled: false,
            public_network_address: None,
            private_network_base: "192.168.56".to_string(),
            public_network_base: "192.168.1".to_string(),
        }
    }

    #[test]
    fn test_all_empty_input_yields_default_record() {
        // box, hostname, memory, cpus, private?, private ip, public?
        let (ctx, reader, _) = create_test_context("\n\n\n\n\n\n\n", 8);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(config, default_record());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_prompt_order_and_labels() {
        let (ctx, _, output) = create_test_context("\n\n\n\n\n\n\n", 8);

        ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(
            output.get_prompts(),
            vec![
                "Box image name (default: ubuntu/jammy64): ",
                "Hostname (default: gogrant-box): ",
                "Memory (MB) (default: 1024): ",
                "CPU count (default: 2): ",
                "Enable private network? (y/N) (default: true): ",
                "Private network IP (default: 192.168.56.100): ",
                "Enable public network? (y/N) (default: false): ",
            ]
        );
    }

    #[test]
    fn test_custom_answers_with_both_networks() {
        let input = "hashicorp/bionic64\nweb-01\n2048\n4\ny\n10.0.0.5\nyes\n77\n";
        let (ctx, reader, _) = create_test_context(input, 8);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(config.box_image, "hashicorp/bionic64");
        assert_eq!(config.hostname, "web-01");
        assert_eq!(config.memory_mb, 2048);
        assert_eq!(config.cpu_count, 4);
        assert_eq!(config.private_network_address.as_deref(), Some("10.0.0.5"));
        assert!(config.public_network_enabled);
        assert_eq!(config.public_network_address.as_deref(), Some("192.168.1.77"));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_declined_private_network_skips_address_prompt() {
        let (ctx, reader, output) = create_test_context("\n\n\n\nnope\n\n", 8);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert!(!config.private_network_enabled);
        assert_eq!(config.private_network_address, None);
        assert!(!config.public_network_enabled);
        assert_eq!(config.public_network_address, None);
        assert!(!output.get_prompts().iter().any(|p| p.starts_with("Private network IP")));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_cpu_answer_is_not_rechecked_against_host() {
        let (ctx, _, _) = create_test_context("\n\n\n64\n\n\n\n", 4);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(config.cpu_count, 64);
    }

    #[test]
    fn test_negative_memory_is_accepted() {
        let (ctx, _, _) = create_test_context("\n\n-512\n\n\n\n\n", 4);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(config.memory_mb, -512);
    }

    #[test]
    fn test_preflight_fails_before_any_prompt() {
        let (ctx, reader, output) = create_test_context("\n\n\n\n\n\n\n", 2);

        let err = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::InsufficientCpus {
                required: 2,
                available: 2
            })
        ));
        assert!(output.get_messages().is_empty());
        assert_eq!(reader.remaining(), 7);
    }

    #[test]
    fn test_preflight_boundaries() {
        assert!(ConfigAssembler::preflight(&FixedHostInfo::new(1), &STANDARD_DEFAULTS).is_err());
        assert!(ConfigAssembler::preflight(&FixedHostInfo::new(2), &STANDARD_DEFAULTS).is_err());
        assert!(ConfigAssembler::preflight(&FixedHostInfo::new(3), &STANDARD_DEFAULTS).is_ok());
    }

    #[test]
    fn test_preflight_passes_for_non_positive_default() {
        let host = FixedHostInfo::new(1);

        for cpu_count in [0, -4] {
            let defaults = VagrantDefaults {
                cpu_count,
                ..STANDARD_DEFAULTS
            };
            assert!(ConfigAssembler::preflight(&host, &defaults).is_ok(), "cpu_count {}", cpu_count);
        }
    }

    #[test]
    fn test_preflight_reports_required_and_available() {
        let defaults = VagrantDefaults {
            cpu_count: 16,
            ..STANDARD_DEFAULTS
        };

        let err = ConfigAssembler::preflight(&FixedHostInfo::new(8), &defaults).unwrap_err();

        assert_eq!(err.to_string(), "not enough CPUs: 16 required, 8 available");
    }

    #[test]
    fn test_injected_defaults_drive_prompts_and_preflight() {
        let defaults = VagrantDefaults {
            box_image: "debian/bookworm64",
            cpu_count: 1,
            private_network_enabled: false,
            public_network_enabled: true,
            ..STANDARD_DEFAULTS
        };
        let (ctx, reader, _) = create_test_context("\n\n\n\n\n\n\n", 2);

        let config = ConfigAssembler::assemble(&ctx, &defaults).unwrap();

        assert_eq!(config.box_image, "debian/bookworm64");
        assert_eq!(config.cpu_count, 1);
        assert_eq!(config.private_network_address, None);
        assert_eq!(config.public_network_address.as_deref(), Some("192.168.1.50"));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_retries_inside_sequence() {
        let input = "\n\nlots\n1024\n\n\n300\n20\n\n";
        let (ctx, reader, output) = create_test_context(input, 8);

        let config = ConfigAssembler::assemble(&ctx, &STANDARD_DEFAULTS).unwrap();

        assert_eq!(config.memory_mb, 1024);
        assert_eq!(config.private_network_address.as_deref(), Some("192.168.56.20"));
        assert_eq!(output.get_warnings().len(), 2);
        assert_eq!(reader.remaining(), 0);
    }
}
