//! Static name pools and lookup tables the generator draws from.

/// Immutable pools handed to the generator. Pool sizes bound the pool-backed
/// collections: nothing wraps around when a count exceeds a pool.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    pub first_names: &'static [&'static str],
    pub middle_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    /// `(code, name)` pairs
    pub departments: &'static [(&'static str, &'static str)],
    /// Workflow template names per department code
    pub workflow_names: &'static [(&'static str, &'static [&'static str])],
    pub product_names: &'static [&'static str],
    pub material_names: &'static [&'static str],
    /// `(material name, category name, unit)` for known materials
    pub material_profiles: &'static [(&'static str, &'static str, &'static str)],
    pub category_names: &'static [&'static str],
    pub category_colors: &'static [&'static str],
    pub supplier_names: &'static [&'static str],
    pub units: &'static [&'static str],
    pub export_reasons: &'static [&'static str],
    pub warranty_issues: &'static [&'static str],
    pub image_url: &'static str,
}

impl Catalog {
    pub const fn standard() -> Self {
        STANDARD
    }

    pub fn workflows_for(&self, department_code: &str) -> &'static [&'static str] {
        self.workflow_names
            .iter()
            .find(|(code, _)| *code == department_code)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// Known `(category, unit)` for a material name.
    pub fn material_profile(&self, name: &str) -> Option<(&'static str, &'static str)> {
        self.material_profiles
            .iter()
            .find(|(material, _, _)| *material == name)
            .map(|(_, category, unit)| (*category, *unit))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        STANDARD
    }
}

const STANDARD: Catalog = Catalog {
    first_names: &[
        "Nguyễn", "Trần", "Lê", "Phạm", "Hoàng", "Võ", "Đặng", "Bùi", "Đỗ", "Hồ",
    ],
    middle_names: &[
        "Anh", "Minh", "Thị", "Văn", "Hồng", "Lan", "Dũng", "Hùng", "Thảo", "Linh",
    ],
    last_names: &[
        "Văn", "Thị", "Minh", "Hồng", "Lan", "Anh", "Dũng", "Hùng", "Thảo", "Linh",
    ],
    departments: &[
        ("DEPT_001", "Phòng Cắt"),
        ("DEPT_002", "Phòng May"),
        ("DEPT_003", "Phòng Là Ủi"),
        ("DEPT_004", "Phòng Kiểm Tra"),
        ("DEPT_005", "Phòng Đóng Gói"),
    ],
    workflow_names: &[
        ("DEPT_001", &["Cắt vải", "Cắt chỉ", "Cắt phụ liệu"]),
        (
            "DEPT_002",
            &["May thân", "May tay áo", "May cổ áo", "May đường viền"],
        ),
        ("DEPT_003", &["Là ủi thân", "Là ủi tay áo", "Là ủi hoàn thiện"]),
        (
            "DEPT_004",
            &["Kiểm tra chất lượng", "Kiểm tra kích thước", "Kiểm tra đường may"],
        ),
        ("DEPT_005", &["Đóng gói", "Dán nhãn", "Bọc bảo vệ"]),
    ],
    product_names: &[
        "Áo thun nữ size M",
        "Áo sơ mi nam size L",
        "Quần jeans nam size 32",
        "Váy công sở size S",
        "Áo khoác nữ size M",
        "Quần short nam size 30",
        "Áo len nữ size L",
        "Quần tây nam size 34",
    ],
    material_names: &[
        "Vải cotton",
        "Vải denim",
        "Vải lụa",
        "Chỉ may",
        "Khóa kéo",
        "Khuy áo",
        "Da bò",
        "Vải thun",
        "Bông vải",
        "Túi vải",
    ],
    material_profiles: &[
        ("Vải cotton", "Vải", "m2"),
        ("Vải denim", "Vải", "m2"),
        ("Vải lụa", "Vải", "m2"),
        ("Vải thun", "Vải", "m2"),
        ("Chỉ may", "Phụ liệu", "cuon"),
        ("Khóa kéo", "Phụ liệu", "cai"),
        ("Khuy áo", "Phụ liệu", "cai"),
        ("Da bò", "Da", "m2"),
        ("Bông vải", "Vải", "kg"),
        ("Túi vải", "Bao bì", "cai"),
    ],
    category_names: &["Vải", "Phụ liệu", "Da", "Hóa chất", "Bao bì"],
    category_colors: &[
        "#1890ff", "#52c41a", "#faad14", "#f5222d", "#722ed1", "#eb2f96", "#13c2c2",
    ],
    supplier_names: &[
        "Công ty Vải ABC",
        "Nhà cung cấp Phụ liệu XYZ",
        "Công ty Da DEF",
        "Nhà cung cấp Hóa chất GHI",
        "Công ty Bao bì JKL",
    ],
    units: &[
        "cai", "hop", "thung", "cuon", "bo", "kg", "g", "mg", "tan", "lit", "ml", "m3", "m", "cm",
        "mm", "m2", "cm2", "tam", "bao", "palette",
    ],
    export_reasons: &["Sản xuất", "Bán hàng", "Kiểm tra", "Hư hỏng"],
    warranty_issues: &["Lỗi sản phẩm", "Không đúng mẫu"],
    image_url: "https://firebasestorage.googleapis.com/v0/b/morata-8e8e4.appspot.com/o/images%2Fproduct.jpg?alt=media&token=2d68623c-9ee8-4c1d-905b-c5155ba427ed",
};
