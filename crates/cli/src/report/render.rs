// Path: crates/cli/src/report/render.rs
//! Text rendering of an app and its instances.
//!
//! Output is a pure function of the inputs: maps are printed in the order
//! they were delivered, and nothing depends on time or environment.

use roflscan_types::app::{AppAuthPolicy, AppConfig, EnclaveIdentity, Endorsement, Registration};
use std::io::{self, Write};

/// Marker printed instead of any secret value.
pub const REDACTED: &str = "<encrypted>";
/// Marker printed for absent optional fields.
pub const NONE: &str = "<none>";

/// Renders one app block. `instances` is `None` when they could not be resolved.
pub fn render_app<W: Write>(
    out: &mut W,
    ordinal: usize,
    app: &AppConfig,
    instances: Option<&[Registration]>,
) -> io::Result<()> {
    writeln!(out, "ROFL App #{}:", ordinal)?;
    writeln!(out, "  ID: {}", app.id)?;
    match &app.admin {
        Some(admin) => writeln!(out, "  Admin: {}", admin)?,
        None => writeln!(out, "  Admin: {}", NONE)?,
    }
    writeln!(out, "  Stake: {}", app.stake)?;
    writeln!(out, "  SEK: {}", app.sek)?;

    render_policy(out, &app.policy)?;

    if !app.metadata.is_empty() {
        writeln!(out, "  App Metadata:")?;
        for (key, value) in app.metadata.iter() {
            writeln!(out, "    {}: {}", key, value)?;
        }
    }

    render_secrets(out, app.secrets.keys())?;

    match instances {
        Some(instances) => render_instances(out, instances)?,
        None => writeln!(out, "  Instances: <unknown>")?,
    }
    writeln!(out)
}

fn render_policy<W: Write>(out: &mut W, policy: &AppAuthPolicy) -> io::Result<()> {
    writeln!(out, "  Policy:")?;
    writeln!(out, "    Fee Policy: {}", policy.fees.code())?;
    writeln!(out, "    Max Expiration: {}", policy.max_expiration)?;

    writeln!(out, "    Enclaves: {}", policy.enclaves.len())?;
    for (j, enclave) in policy.enclaves.iter().enumerate() {
        render_enclave(out, j + 1, enclave)?;
    }

    writeln!(out, "    Endorsements: {}", policy.endorsements.len())?;
    for (j, endorsement) in policy.endorsements.iter().enumerate() {
        writeln!(out, "      Endorsement #{}:", j + 1)?;
        render_endorsement(out, endorsement)?;
    }
    Ok(())
}

fn render_enclave<W: Write>(out: &mut W, ordinal: usize, enclave: &EnclaveIdentity) -> io::Result<()> {
    writeln!(out, "      Enclave #{}:", ordinal)?;
    writeln!(out, "        MrEnclave: {}", enclave.mr_enclave)?;
    writeln!(out, "        MrSigner: {}", enclave.mr_signer)
}

/// Composite rules show their child count only; children are never expanded.
fn render_endorsement<W: Write>(out: &mut W, endorsement: &Endorsement) -> io::Result<()> {
    const INDENT: &str = "        ";
    match endorsement {
        Endorsement::Any | Endorsement::ComputeRole | Endorsement::ObserverRole => {
            writeln!(out, "{}Type: {}", INDENT, endorsement.tag())
        }
        Endorsement::Entity(id) => {
            writeln!(out, "{}Type: Entity", INDENT)?;
            writeln!(out, "{}Entity: {}", INDENT, id)
        }
        Endorsement::Node(id) => {
            writeln!(out, "{}Type: Node", INDENT)?;
            writeln!(out, "{}Node: {}", INDENT, id)
        }
        Endorsement::Provider(addr) => {
            writeln!(out, "{}Type: Provider", INDENT)?;
            writeln!(out, "{}Provider: {}", INDENT, addr)
        }
        Endorsement::ProviderInstanceAdmin(addr) => {
            writeln!(out, "{}Type: ProviderInstanceAdmin", INDENT)?;
            writeln!(out, "{}Admin: {}", INDENT, addr)
        }
        Endorsement::And(children) | Endorsement::Or(children) => writeln!(
            out,
            "{}Type: {} ({} policies)",
            INDENT,
            endorsement.tag(),
            children.len()
        ),
    }
}

/// Takes only the secret names, so a value can not be printed by mistake.
fn render_secrets<'a, W, I>(out: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: ExactSizeIterator<Item = &'a String>,
{
    let count = names.len();
    if count == 0 {
        return Ok(());
    }
    writeln!(out, "  Secrets: {}", count)?;
    for name in names {
        writeln!(out, "    {}: {}", name, REDACTED)?;
    }
    Ok(())
}

fn render_instances<W: Write>(out: &mut W, instances: &[Registration]) -> io::Result<()> {
    writeln!(out, "  Instances: {}", instances.len())?;
    for (j, inst) in instances.iter().enumerate() {
        writeln!(out, "    Instance #{}:", j + 1)?;
        writeln!(out, "      App: {}", inst.app)?;
        writeln!(out, "      Node ID: {}", inst.node_id)?;
        match &inst.entity_id {
            Some(entity) => writeln!(out, "      Entity ID: {}", entity)?,
            None => writeln!(out, "      Entity ID: {}", NONE)?,
        }
        writeln!(out, "      RAK: {}", inst.rak)?;
        writeln!(out, "      REK: {}", inst.rek)?;
        writeln!(out, "      Expiration: {}", inst.expiration)?;
        writeln!(out, "      Extra Keys: {}", inst.extra_keys.len())?;
        for (k, key) in inst.extra_keys.iter().enumerate() {
            writeln!(out, "        Key #{}: {}", k + 1, key)?;
        }
        if inst.metadata.is_empty() {
            writeln!(out, "      Instance Metadata: {}", NONE)?;
        } else {
            writeln!(out, "      Instance Metadata:")?;
            for (key, value) in inst.metadata.iter() {
                writeln!(out, "        {}: {}", key, value)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{app, app_id, instance, key};
    use indexmap::IndexMap;
    use roflscan_types::app::{Address, Ciphertext, Measurement, OpaqueKey};

    fn render(app: &AppConfig, instances: Option<&[Registration]>) -> String {
        let mut out = Vec::new();
        render_app(&mut out, 1, app, instances).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn addr(seed: u8) -> Address {
        Address::from_bytes([seed; 21])
    }

    #[test]
    fn test_full_block_layout() {
        let mut a = app(1);
        a.admin = Some(addr(2));
        a.policy.enclaves = vec![EnclaveIdentity {
            mr_enclave: Measurement::from_bytes([0xaa; 32]),
            mr_signer: Measurement::from_bytes([0xbb; 32]),
        }];
        a.policy.endorsements = vec![
            Endorsement::Provider(addr(3)),
            Endorsement::Entity(key(4)),
        ];
        a.metadata = IndexMap::from([("net.oasis.rofl.name".to_string(), "demo".to_string())]);
        a.secrets = IndexMap::from([("TOKEN".to_string(), Ciphertext::from_bytes(vec![1, 2, 3]))]);

        let mut inst = instance(&a.id, 777);
        inst.entity_id = Some(key(5));
        inst.extra_keys = vec![OpaqueKey::from_bytes(vec![9, 9])];
        inst.metadata = IndexMap::from([("region".to_string(), "eu".to_string())]);
        let bare = instance(&a.id, 778);

        let expected = format!(
            "ROFL App #1:
  ID: {id}
  Admin: {admin}
  Stake: 100 <native>
  SEK: {sek}
  Policy:
    Fee Policy: 2
    Max Expiration: 3
    Enclaves: 1
      Enclave #1:
        MrEnclave: {mre}
        MrSigner: {mrs}
    Endorsements: 2
      Endorsement #1:
        Type: Provider
        Provider: {provider}
      Endorsement #2:
        Type: Entity
        Entity: {entity}
  App Metadata:
    net.oasis.rofl.name: demo
  Secrets: 1
    TOKEN: <encrypted>
  Instances: 2
    Instance #1:
      App: {id}
      Node ID: {node}
      Entity ID: {inst_entity}
      RAK: {rak}
      REK: {rek}
      Expiration: 777
      Extra Keys: 1
        Key #1: CQk=
      Instance Metadata:
        region: eu
    Instance #2:
      App: {id}
      Node ID: {node}
      Entity ID: <none>
      RAK: {rak}
      REK: {rek}
      Expiration: 778
      Extra Keys: 0
      Instance Metadata: <none>

",
            id = a.id,
            admin = addr(2),
            sek = key(1),
            mre = "aa".repeat(32),
            mrs = "bb".repeat(32),
            provider = addr(3),
            entity = key(4),
            node = key(100),
            inst_entity = key(5),
            rak = key(101),
            rek = key(102),
        );

        assert_eq!(render(&a, Some(&[inst, bare][..])), expected);
    }

    #[test]
    fn test_secret_values_never_rendered() {
        let mut a = app(1);
        let secret = b"hunter2-super-secret".to_vec();
        a.secrets = IndexMap::from([
            ("DB_PASSWORD".to_string(), Ciphertext::from_bytes(secret.clone())),
            ("API".to_string(), Ciphertext::from_bytes(vec![0xde, 0xad])),
        ]);
        let text = render(&a, Some(&[]));

        assert!(text.contains("  Secrets: 2\n    DB_PASSWORD: <encrypted>\n    API: <encrypted>\n"));
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("aHVudGVyMi")); // base64 prefix of the value
    }

    #[test]
    fn test_composite_endorsements_are_shallow() {
        let mut a = app(1);
        let deep = Endorsement::Or(vec![
            Endorsement::And(vec![Endorsement::Node(key(7)), Endorsement::ComputeRole]),
            Endorsement::Any,
            Endorsement::ObserverRole,
        ]);
        a.policy.endorsements = vec![
            Endorsement::And(vec![deep.clone(), Endorsement::ProviderInstanceAdmin(addr(8))]),
            deep,
        ];
        let text = render(&a, Some(&[]));

        assert!(text.contains(
            "    Endorsements: 2\n      Endorsement #1:\n        Type: And (2 policies)\n      Endorsement #2:\n        Type: Or (3 policies)\n"
        ));
        assert!(!text.contains(&key(7).to_string()));
        assert!(!text.contains("ComputeRole"));
        assert!(!text.contains("ProviderInstanceAdmin"));
    }

    #[test]
    fn test_empty_maps_omit_blocks() {
        let a = app(2);
        let text = render(&a, Some(&[]));
        assert!(!text.contains("App Metadata:"));
        assert!(!text.contains("Secrets:"));
        assert!(text.contains("  Admin: <none>\n"));
        assert!(text.ends_with("  Instances: 0\n\n"));
    }

    #[test]
    fn test_metadata_in_delivery_order_once() {
        let mut a = app(1);
        a.metadata = IndexMap::from([
            ("z".to_string(), "1".to_string()),
            ("a".to_string(), "2".to_string()),
            ("m".to_string(), "3".to_string()),
        ]);
        let text = render(&a, Some(&[]));
        assert!(text.contains("  App Metadata:\n    z: 1\n    a: 2\n    m: 3\n"));
        assert_eq!(text.matches("    z: 1\n").count(), 1);
    }

    #[test]
    fn test_unknown_instances() {
        let text = render(&app(1), None);
        assert!(text.ends_with("  Instances: <unknown>\n\n"));
        assert!(!text.contains("Instance #"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut a = app(3);
        a.metadata = IndexMap::from([("k".to_string(), "v".to_string())]);
        let instances = vec![instance(&app_id(3), 1), instance(&app_id(3), 2)];
        let first = render(&a, Some(instances.as_slice()));
        for _ in 0..5 {
            assert_eq!(render(&a, Some(instances.as_slice())), first);
        }
    }
}
