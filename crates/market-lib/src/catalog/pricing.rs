//! Cloud provider price lists, $/hr per GPU on-demand

use crate::models::{Offering, Provider, ProviderKind};

fn offering(gpu_id: &str, instance: &str, per_instance: u32, hourly: f64, regions: &[(&str, f64)]) -> Offering {
    Offering {
        gpu_id: gpu_id.to_string(),
        instance: instance.to_string(),
        gpus_per_instance: per_instance,
        hourly_usd: hourly,
        regions: regions.iter().map(|(r, p)| (r.to_string(), *p)).collect(),
    }
}

fn provider(
    id: &str,
    name: &str,
    kind: ProviderKind,
    discount_1yr: f64,
    discount_3yr: f64,
    offerings: Vec<Offering>,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        offerings,
        reserved_1yr_discount: discount_1yr,
        reserved_3yr_discount: discount_3yr,
    }
}

pub(super) fn providers() -> Vec<Provider> {
    use ProviderKind::*;
    vec![
        provider("AWS", "Amazon Web Services", Cloud, 0.40, 0.60, vec![
            offering("B200", "p6-b200.48xlarge", 8, 14.24, &[
                ("us-east-1", 14.24), ("us-east-2", 14.24), ("us-west-2", 14.24),
                ("eu-west-1", 15.66), ("eu-central-1", 16.24),
                ("ap-northeast-1", 17.09), ("ap-southeast-1", 16.66),
            ]),
            offering("H200", "p5en.48xlarge", 8, 7.91, &[
                ("us-east-1", 7.91), ("us-east-2", 7.91), ("us-west-2", 7.91),
                ("eu-west-1", 8.70), ("eu-central-1", 9.02), ("ap-northeast-1", 9.50),
            ]),
            offering("H100-SXM", "p5.48xlarge", 8, 6.88, &[
                ("us-east-1", 6.88), ("us-east-2", 6.88), ("us-west-2", 6.88),
                ("eu-west-1", 7.57), ("eu-central-1", 7.85),
                ("ap-northeast-1", 8.26), ("ap-southeast-1", 8.04),
            ]),
            offering("A100-80GB", "p4de.24xlarge", 8, 3.43, &[
                ("us-east-1", 3.43), ("us-east-2", 3.43), ("us-west-2", 3.43),
                ("eu-west-1", 3.77), ("eu-central-1", 3.91),
                ("ap-northeast-1", 4.12), ("ap-southeast-1", 4.01),
            ]),
            offering("A100-40GB", "p4d.24xlarge", 8, 2.74, &[
                ("us-east-1", 2.74), ("us-east-2", 2.74), ("us-west-2", 2.74),
                ("eu-west-1", 3.01), ("eu-central-1", 3.12),
                ("ap-northeast-1", 3.29), ("ap-southeast-1", 3.20),
            ]),
            offering("L40S", "g6e.xlarge", 1, 1.86, &[
                ("us-east-1", 1.86), ("us-east-2", 1.86), ("us-west-2", 1.86),
                ("eu-west-1", 2.05), ("eu-central-1", 2.12),
            ]),
            offering("A10G", "g5.xlarge", 1, 1.006, &[
                ("us-east-1", 1.006), ("us-east-2", 1.006), ("us-west-2", 1.006),
                ("eu-west-1", 1.11), ("eu-central-1", 1.15),
                ("ap-northeast-1", 1.22), ("ap-southeast-1", 1.18),
            ]),
        ]),
        provider("GCP", "Google Cloud Platform", Cloud, 0.37, 0.55, vec![
            offering("H200", "a3-ultragpu-8g", 8, 10.85, &[
                ("us-central1", 10.85), ("us-east4", 10.85), ("us-west1", 10.85),
                ("europe-west4", 11.94), ("europe-west1", 11.82),
            ]),
            offering("H100-SXM", "a3-highgpu-8g", 8, 11.06, &[
                ("us-central1", 11.06), ("us-east4", 11.06), ("us-west1", 11.06),
                ("europe-west4", 12.17), ("europe-west1", 12.04),
                ("asia-east1", 12.72), ("asia-northeast1", 12.93),
            ]),
            offering("A100-80GB", "a2-ultragpu-1g", 1, 5.07, &[
                ("us-central1", 5.07), ("us-east4", 5.07), ("us-west1", 5.07),
                ("europe-west4", 5.58), ("europe-west1", 5.52),
                ("asia-east1", 5.83), ("asia-northeast1", 5.93),
            ]),
            offering("A100-40GB", "a2-highgpu-1g", 1, 3.67, &[
                ("us-central1", 3.67), ("us-east4", 3.67), ("us-west1", 3.67),
                ("europe-west4", 4.04), ("europe-west1", 4.00),
                ("asia-east1", 4.22), ("asia-northeast1", 4.29),
            ]),
            offering("V100", "n1-standard-8+V100", 1, 2.97, &[
                ("us-central1", 2.97), ("us-east4", 2.97), ("us-west1", 2.97),
                ("europe-west4", 3.27),
            ]),
        ]),
        provider("Azure", "Microsoft Azure", Cloud, 0.36, 0.56, vec![
            offering("GB200", "ND128isr_NDR_GB200_v6", 4, 27.04, &[
                ("eastus", 27.04), ("eastus2", 27.04), ("westus2", 27.04),
                ("westeurope", 29.74), ("northeurope", 29.42),
            ]),
            offering("H200", "ND96isr_H200_v5", 8, 10.60, &[
                ("eastus", 10.60), ("eastus2", 10.60), ("westus2", 10.60),
                ("westeurope", 11.66), ("northeurope", 11.53),
            ]),
            offering("H100-SXM", "ND96isr_H100_v5", 8, 12.29, &[
                ("eastus", 12.29), ("eastus2", 12.29), ("westus2", 12.29), ("westus3", 12.29),
                ("westeurope", 13.52), ("northeurope", 13.38),
                ("japaneast", 14.75), ("southeastasia", 14.34),
            ]),
            offering("MI325X", "ND96isr_MI325X_v5", 8, 7.20, &[
                ("eastus", 7.20), ("eastus2", 7.20), ("westus2", 7.20),
                ("westeurope", 7.92), ("southeastasia", 8.40),
            ]),
            offering("MI300X", "ND96isr_MI300X_v5", 8, 6.00, &[
                ("eastus", 6.00), ("eastus2", 6.00), ("westus2", 6.00),
                ("westeurope", 6.60), ("southeastasia", 7.00),
            ]),
            offering("A100-80GB", "ND96amsr_A100_v4", 8, 4.10, &[
                ("eastus", 4.10), ("eastus2", 4.10), ("westus2", 4.10),
                ("westeurope", 4.51), ("northeurope", 4.46),
                ("japaneast", 4.92), ("southeastasia", 4.78),
            ]),
            offering("A10G", "NV36ads_A10_v5", 1, 0.91, &[
                ("eastus", 0.91), ("eastus2", 0.91), ("westus2", 0.91),
                ("westeurope", 1.00), ("northeurope", 0.99),
            ]),
            offering("V100", "NC6s_v3", 1, 3.06, &[
                ("eastus", 3.06), ("eastus2", 3.06), ("westus2", 3.06),
                ("westeurope", 3.37), ("northeurope", 3.33),
            ]),
        ]),
        provider("Lambda", "Lambda Labs", Cloud, 0.20, 0.35, vec![
            offering("B200", "gpu_8x_b200", 8, 5.74, &[
                ("us-west-1", 5.74), ("us-south-1", 5.74),
            ]),
            offering("H100-SXM", "gpu_8x_h100_sxm5", 8, 2.49, &[
                ("us-west-1", 2.49), ("us-south-1", 2.49), ("us-east-1", 2.49),
                ("europe-central-1", 2.79),
            ]),
            offering("H100-PCIe", "gpu_1x_h100_pcie", 1, 2.86, &[
                ("us-west-1", 2.86), ("us-south-1", 2.86), ("us-east-1", 2.86),
            ]),
            offering("A100-80GB", "gpu_8x_a100_80gb_sxm4", 8, 1.29, &[
                ("us-west-1", 1.29), ("us-south-1", 1.29), ("us-east-1", 1.29),
            ]),
            offering("A100-40GB", "gpu_8x_a100", 8, 1.10, &[
                ("us-west-1", 1.10), ("us-south-1", 1.10),
            ]),
            offering("A10G", "gpu_1x_a10", 1, 0.60, &[
                ("us-west-1", 0.60), ("us-south-1", 0.60),
            ]),
        ]),
        provider("CoreWeave", "CoreWeave", Cloud, 0.25, 0.45, vec![
            offering("B200", "b200-sxm-192gb", 1, 3.75, &[("LAS1", 3.75), ("ORD1", 3.75)]),
            offering("H200", "h200-sxm-141gb", 1, 3.49, &[("LAS1", 3.49), ("ORD1", 3.49)]),
            offering("H100-SXM", "h100-sxm-80gb", 1, 2.23, &[
                ("LAS1", 2.23), ("ORD1", 2.23), ("LGA1", 2.23),
            ]),
            offering("H100-PCIe", "h100-pcie-80gb", 1, 2.06, &[("LAS1", 2.06), ("ORD1", 2.06)]),
            offering("MI325X", "mi325x-256gb", 1, 3.20, &[("LAS1", 3.20), ("ORD1", 3.20)]),
            offering("A100-80GB", "a100-sxm-80gb", 1, 1.28, &[
                ("LAS1", 1.28), ("ORD1", 1.28), ("LGA1", 1.28),
            ]),
            offering("A100-40GB", "a100-pcie-40gb", 1, 0.76, &[("LAS1", 0.76), ("ORD1", 0.76)]),
            offering("L40S", "l40s-48gb", 1, 1.14, &[("LAS1", 1.14), ("ORD1", 1.14)]),
            offering("RTX-4090", "rtx-4090-24gb", 1, 0.74, &[("LAS1", 0.74), ("ORD1", 0.74)]),
        ]),
        provider("RunPod", "RunPod", Marketplace, 0.15, 0.30, vec![
            offering("B200", "b200-sxm", 1, 5.98, &[("US", 5.98)]),
            offering("H200", "h200-sxm", 1, 3.59, &[("US", 3.59)]),
            offering("H100-SXM", "h100-sxm", 1, 1.99, &[("US", 1.99), ("EU", 2.19)]),
            offering("H100-PCIe", "h100-pcie", 1, 1.79, &[("US", 1.79), ("EU", 1.99)]),
            offering("MI325X", "mi325x", 1, 2.99, &[("US", 2.99), ("EU", 3.29)]),
            offering("MI300X", "mi300x", 1, 2.49, &[("US", 2.49), ("EU", 2.69)]),
            offering("A100-80GB", "a100-80gb", 1, 1.29, &[("US", 1.29), ("EU", 1.44)]),
            offering("A100-40GB", "a100-40gb", 1, 0.84, &[("US", 0.84), ("EU", 0.94)]),
            offering("L40S", "l40s", 1, 0.79, &[("US", 0.79)]),
            offering("RTX-4090", "rtx4090", 1, 0.34, &[("US", 0.34), ("EU", 0.39)]),
            offering("A10G", "a10g", 1, 0.39, &[("US", 0.39)]),
        ]),
        provider("Vast.ai", "Vast.ai", Marketplace, 0.0, 0.0, vec![
            offering("B200", "community", 1, 2.67, &[("US", 2.67), ("EU", 3.10)]),
            offering("H200", "community", 1, 1.97, &[("US", 1.97), ("EU", 2.20), ("APAC", 2.40)]),
            offering("H100-SXM", "community", 1, 1.70, &[("US", 1.70), ("EU", 1.90), ("APAC", 2.05)]),
            offering("H100-PCIe", "community", 1, 1.55, &[("US", 1.55), ("EU", 1.70)]),
            offering("MI300X", "community", 1, 1.50, &[("US", 1.50), ("EU", 1.70)]),
            offering("A100-80GB", "community", 1, 0.85, &[("US", 0.85), ("EU", 1.00), ("APAC", 1.10)]),
            offering("A100-40GB", "community", 1, 0.55, &[("US", 0.55), ("EU", 0.65)]),
            offering("MI250X", "community", 1, 0.65, &[("US", 0.65), ("EU", 0.75)]),
            offering("RTX-4090", "community", 1, 0.29, &[("US", 0.29), ("EU", 0.34), ("APAC", 0.38)]),
            offering("L40S", "community", 1, 0.47, &[("US", 0.47), ("EU", 0.57)]),
            offering("RTX-5090", "community", 1, 0.45, &[("US", 0.45), ("EU", 0.55)]),
        ]),
        provider("FluidStack", "FluidStack", Marketplace, 0.20, 0.35, vec![
            offering("H200", "h200_sxm", 1, 2.30, &[("US", 2.30), ("EU", 2.53)]),
            offering("H100-SXM", "h100_sxm", 1, 2.10, &[("US", 2.10), ("EU", 2.31), ("APAC", 2.45)]),
            offering("MI300X", "mi300x", 1, 1.75, &[("US", 1.75), ("EU", 1.93)]),
            offering("A100-80GB", "a100_80gb", 1, 0.95, &[("US", 0.95), ("EU", 1.10)]),
            offering("A100-40GB", "a100_40gb", 1, 0.65, &[("US", 0.65)]),
            offering("L40S", "l40s", 1, 0.69, &[("US", 0.69)]),
        ]),
        provider("Oracle", "Oracle Cloud (OCI)", Cloud, 0.30, 0.50, vec![
            offering("B200", "BM.GPU.B200.8", 8, 4.25, &[
                ("us-ashburn-1", 4.25), ("us-phoenix-1", 4.25),
                ("uk-london-1", 4.68), ("eu-frankfurt-1", 4.68),
            ]),
            offering("H200", "BM.GPU.H200.8", 8, 10.00, &[
                ("us-ashburn-1", 10.00), ("us-phoenix-1", 10.00),
                ("uk-london-1", 11.00), ("eu-frankfurt-1", 11.00),
            ]),
            offering("H100-SXM", "BM.GPU.H100.8", 8, 3.19, &[
                ("us-ashburn-1", 3.19), ("us-phoenix-1", 3.19), ("uk-london-1", 3.51),
                ("eu-frankfurt-1", 3.51), ("ap-tokyo-1", 3.83),
            ]),
            offering("A100-80GB", "BM.GPU.A100-v2.8", 8, 2.95, &[
                ("us-ashburn-1", 2.95), ("us-phoenix-1", 2.95),
                ("uk-london-1", 3.25), ("eu-frankfurt-1", 3.25),
            ]),
            offering("A10G", "VM.GPU.A10.1", 1, 0.70, &[
                ("us-ashburn-1", 0.70), ("us-phoenix-1", 0.70),
            ]),
        ]),
        provider("Together", "Together AI", Cloud, 0.25, 0.40, vec![
            offering("H100-SXM", "dedicated", 1, 2.50, &[("US", 2.50)]),
            offering("A100-80GB", "dedicated", 1, 1.50, &[("US", 1.50)]),
        ]),
    ]
}
