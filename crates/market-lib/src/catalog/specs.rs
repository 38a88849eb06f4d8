//! GPU specification table

use crate::models::{GpuSpec, Tier, Vendor};

#[allow(clippy::too_many_arguments)]
fn gpu(
    id: &str,
    name: &str,
    vendor: Vendor,
    vram_gb: u32,
    arch: &str,
    fp16_tflops: f64,
    fp32_tflops: f64,
    tdp_watts: u32,
    interconnect: &str,
    release_year: u16,
    msrp_usd: u32,
    tier: Tier,
) -> GpuSpec {
    GpuSpec {
        id: id.to_string(),
        name: name.to_string(),
        vendor,
        vram_gb,
        arch: arch.to_string(),
        fp16_tflops,
        fp32_tflops,
        tdp_watts,
        interconnect: interconnect.to_string(),
        release_year,
        msrp_usd,
        tier,
    }
}

pub(super) fn gpu_specs() -> Vec<GpuSpec> {
    use Tier::*;
    use Vendor::*;
    vec![
        // NVIDIA Blackwell
        gpu("B200", "NVIDIA B200 192GB", Nvidia, 192, "Blackwell", 2250.0, 75.0, 1000, "NVLink 5.0", 2025, 40000, Flagship),
        gpu("GB200", "NVIDIA GB200 NVL72", Nvidia, 384, "Blackwell", 4500.0, 150.0, 2700, "NVLink 5.0", 2025, 70000, Ultra),
        gpu("RTX-5090", "NVIDIA RTX 5090 32GB", Nvidia, 32, "Blackwell", 209.5, 104.8, 575, "PCIe 5.0", 2025, 1999, Consumer),
        // NVIDIA Hopper
        gpu("H200", "NVIDIA H200 141GB", Nvidia, 141, "Hopper", 989.5, 67.0, 700, "NVLink 4.0", 2024, 35000, Flagship),
        gpu("H100-SXM", "NVIDIA H100 SXM 80GB", Nvidia, 80, "Hopper", 989.5, 67.0, 700, "NVLink 4.0", 2023, 30000, Flagship),
        gpu("H100-PCIe", "NVIDIA H100 PCIe 80GB", Nvidia, 80, "Hopper", 756.0, 51.0, 350, "PCIe 5.0", 2023, 25000, Flagship),
        // NVIDIA Ada Lovelace
        gpu("L40S", "NVIDIA L40S 48GB", Nvidia, 48, "Ada Lovelace", 362.0, 91.6, 350, "PCIe 4.0", 2023, 8000, Mid),
        gpu("RTX-4090", "NVIDIA RTX 4090 24GB", Nvidia, 24, "Ada Lovelace", 330.0, 82.6, 450, "PCIe 4.0", 2022, 1599, Consumer),
        // NVIDIA Ampere
        gpu("A100-80GB", "NVIDIA A100 80GB", Nvidia, 80, "Ampere", 312.0, 19.5, 400, "NVLink 3.0", 2021, 15000, High),
        gpu("A100-40GB", "NVIDIA A100 40GB", Nvidia, 40, "Ampere", 312.0, 19.5, 400, "NVLink 3.0", 2020, 10000, High),
        gpu("A10G", "NVIDIA A10G 24GB", Nvidia, 24, "Ampere", 70.0, 35.0, 300, "PCIe 4.0", 2021, 3500, Mid),
        // NVIDIA legacy
        gpu("V100", "NVIDIA V100 16GB", Nvidia, 16, "Volta", 125.0, 15.7, 300, "NVLink 2.0", 2017, 8000, Legacy),
        // AMD CDNA
        gpu("MI300X", "AMD MI300X 192GB", Amd, 192, "CDNA 3", 1307.0, 163.4, 750, "Infinity Fabric", 2024, 15000, Flagship),
        gpu("MI325X", "AMD MI325X 256GB", Amd, 256, "CDNA 3", 1307.4, 163.4, 1000, "Infinity Fabric", 2025, 20000, Flagship),
        gpu("MI250X", "AMD MI250X 128GB", Amd, 128, "CDNA 2", 383.0, 47.9, 500, "Infinity Fabric", 2022, 12000, High),
        gpu("MI210", "AMD MI210 64GB", Amd, 64, "CDNA 2", 181.0, 23.0, 300, "Infinity Fabric", 2022, 7500, Mid),
    ]
}
