use crate::config::Config;
use crate::docker::ContainerCommand;

use super::preflight::Preflight;

/// Build the `run` invocation for the detector image: auto-removal, the
/// output directory bind-mounted at the in-container path, and the env file
/// as the container's environment source.
pub fn run_command(cfg: &Config, pre: &Preflight) -> ContainerCommand {
    let mount = format!(
        "type=volume,dst={},volume-driver=local,volume-opt=type=none,volume-opt=o=bind,volume-opt=device={}",
        cfg.container_out,
        pre.out_dir.display(),
    );

    ContainerCommand {
        args: vec![
            "run".into(),
            "--rm".into(),
            "--mount".into(),
            mount,
            "--env-file".into(),
            pre.env_file.display().to_string(),
            cfg.image.clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn test_preflight() -> Preflight {
        Preflight {
            env_file: PathBuf::from("/home/u/proj/.env1"),
            out_dir: PathBuf::from("/home/u/proj/out"),
        }
    }

    #[test]
    fn run_command_builds_expected_args() {
        let cfg = Config::default();
        let cmd = run_command(&cfg, &test_preflight());
        assert_eq!(
            cmd.args,
            vec![
                "run".to_string(),
                "--rm".to_string(),
                "--mount".to_string(),
                "type=volume,dst=/app/out,volume-driver=local,volume-opt=type=none,\
                 volume-opt=o=bind,volume-opt=device=/home/u/proj/out"
                    .to_string(),
                "--env-file".to_string(),
                "/home/u/proj/.env1".to_string(),
                "kryptoblack/protexai:latest".to_string(),
            ]
        );
    }

    #[test]
    fn mount_source_is_the_absolute_out_dir() {
        let cfg = Config::default();
        let cmd = run_command(&cfg, &test_preflight());
        let mount = &cmd.args[3];
        assert!(mount.contains("volume-opt=device=/home/u/proj/out"));
        assert!(mount.contains("dst=/app/out"));
    }

    #[test]
    fn image_is_the_final_positional_argument() {
        let cfg = Config::default();
        let cmd = run_command(&cfg, &test_preflight());
        assert_eq!(cmd.args.last().unwrap(), "kryptoblack/protexai:latest");
    }

    #[test]
    fn configured_image_and_destination_are_used() {
        let cfg = Config {
            image: "kryptoblack/protexai:v2".into(),
            container_out: "/srv/out".into(),
            ..Config::default()
        };
        let cmd = run_command(&cfg, &test_preflight());
        assert!(cmd.args.contains(&"kryptoblack/protexai:v2".to_string()));
        assert!(cmd.args[3].contains("dst=/srv/out"));
    }
}
