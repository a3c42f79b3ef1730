//! Fixtures shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use loadwise_core::{LoadRequest, Order, Truck};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary workspace with a conventional request location.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.root.join("request.json")
    }
}

/// The hazmat lane example: orders A and B share a lane, C is hazmat.
pub(super) fn sample_request() -> LoadRequest {
    LoadRequest {
        truck: Truck {
            id: "truck-123".to_owned(),
            max_weight_lbs: 44_000,
            max_volume_cuft: 3_000,
        },
        orders: vec![
            order("A", 250_000, 18_000, 1_200, ("2025-12-05", "2025-12-09"), false),
            order("B", 180_000, 12_000, 900, ("2025-12-04", "2025-12-10"), false),
            order("C", 320_000, 20_000, 1_500, ("2025-12-06", "2025-12-08"), true),
        ],
    }
}

fn order(
    id: &str,
    payout_cents: u64,
    weight_lbs: u32,
    volume_cuft: u32,
    (pickup, delivery): (&str, &str),
    is_hazmat: bool,
) -> Order {
    Order {
        id: id.to_owned(),
        payout_cents,
        weight_lbs,
        volume_cuft,
        origin: "Los Angeles, CA".to_owned(),
        destination: "Dallas, TX".to_owned(),
        pickup_date: pickup.parse().expect("pickup date"),
        delivery_date: delivery.parse().expect("delivery date"),
        is_hazmat,
    }
}

/// Serialise `request` into the workspace's request file.
pub(super) fn write_request(path: &Utf8Path, request: &LoadRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
