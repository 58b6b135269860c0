//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constraints;
use crate::display;
use crate::schema::{
    self, AsMemberValue, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape,
    ShapeSchema,
};
use crate::unknown::UnknownVariantValue;

/// AWS WAF Regional `ChangeAction` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// `INSERT`
    Insert,
    /// `DELETE`
    Delete,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl ChangeAction {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["INSERT", "DELETE"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Insert => "INSERT",
            Self::Delete => "DELETE",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ChangeAction {
    fn from(s: &str) -> Self {
        match s {
            "INSERT" => Self::Insert,
            "DELETE" => Self::Delete,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for ChangeAction {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for ChangeAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChangeAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for ChangeAction {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `GeoMatchConstraintType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeoMatchConstraintType {
    /// `Country`
    Country,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl GeoMatchConstraintType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["Country"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Country => "Country",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for GeoMatchConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GeoMatchConstraintType {
    fn from(s: &str) -> Self {
        match s {
            "Country" => Self::Country,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for GeoMatchConstraintType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for GeoMatchConstraintType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GeoMatchConstraintType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for GeoMatchConstraintType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// ISO 3166-1 alpha-2 country codes accepted by a geo match constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeoMatchConstraintValue {
    /// `AF`
    Af,
    /// `AX`
    Ax,
    /// `AL`
    Al,
    /// `DZ`
    Dz,
    /// `AS`
    As,
    /// `AD`
    Ad,
    /// `AO`
    Ao,
    /// `AI`
    Ai,
    /// `AQ`
    Aq,
    /// `AG`
    Ag,
    /// `AR`
    Ar,
    /// `AM`
    Am,
    /// `AW`
    Aw,
    /// `AU`
    Au,
    /// `AT`
    At,
    /// `AZ`
    Az,
    /// `BS`
    Bs,
    /// `BH`
    Bh,
    /// `BD`
    Bd,
    /// `BB`
    Bb,
    /// `BY`
    By,
    /// `BE`
    Be,
    /// `BZ`
    Bz,
    /// `BJ`
    Bj,
    /// `BM`
    Bm,
    /// `BT`
    Bt,
    /// `BO`
    Bo,
    /// `BQ`
    Bq,
    /// `BA`
    Ba,
    /// `BW`
    Bw,
    /// `BV`
    Bv,
    /// `BR`
    Br,
    /// `IO`
    Io,
    /// `BN`
    Bn,
    /// `BG`
    Bg,
    /// `BF`
    Bf,
    /// `BI`
    Bi,
    /// `KH`
    Kh,
    /// `CM`
    Cm,
    /// `CA`
    Ca,
    /// `CV`
    Cv,
    /// `KY`
    Ky,
    /// `CF`
    Cf,
    /// `TD`
    Td,
    /// `CL`
    Cl,
    /// `CN`
    Cn,
    /// `CX`
    Cx,
    /// `CC`
    Cc,
    /// `CO`
    Co,
    /// `KM`
    Km,
    /// `CG`
    Cg,
    /// `CD`
    Cd,
    /// `CK`
    Ck,
    /// `CR`
    Cr,
    /// `CI`
    Ci,
    /// `HR`
    Hr,
    /// `CU`
    Cu,
    /// `CW`
    Cw,
    /// `CY`
    Cy,
    /// `CZ`
    Cz,
    /// `DK`
    Dk,
    /// `DJ`
    Dj,
    /// `DM`
    Dm,
    /// `DO`
    Do,
    /// `EC`
    Ec,
    /// `EG`
    Eg,
    /// `SV`
    Sv,
    /// `GQ`
    Gq,
    /// `ER`
    Er,
    /// `EE`
    Ee,
    /// `ET`
    Et,
    /// `FK`
    Fk,
    /// `FO`
    Fo,
    /// `FJ`
    Fj,
    /// `FI`
    Fi,
    /// `FR`
    Fr,
    /// `GF`
    Gf,
    /// `PF`
    Pf,
    /// `TF`
    Tf,
    /// `GA`
    Ga,
    /// `GM`
    Gm,
    /// `GE`
    Ge,
    /// `DE`
    De,
    /// `GH`
    Gh,
    /// `GI`
    Gi,
    /// `GR`
    Gr,
    /// `GL`
    Gl,
    /// `GD`
    Gd,
    /// `GP`
    Gp,
    /// `GU`
    Gu,
    /// `GT`
    Gt,
    /// `GG`
    Gg,
    /// `GN`
    Gn,
    /// `GW`
    Gw,
    /// `GY`
    Gy,
    /// `HT`
    Ht,
    /// `HM`
    Hm,
    /// `VA`
    Va,
    /// `HN`
    Hn,
    /// `HK`
    Hk,
    /// `HU`
    Hu,
    /// `IS`
    Is,
    /// `IN`
    In,
    /// `ID`
    Id,
    /// `IR`
    Ir,
    /// `IQ`
    Iq,
    /// `IE`
    Ie,
    /// `IM`
    Im,
    /// `IL`
    Il,
    /// `IT`
    It,
    /// `JM`
    Jm,
    /// `JP`
    Jp,
    /// `JE`
    Je,
    /// `JO`
    Jo,
    /// `KZ`
    Kz,
    /// `KE`
    Ke,
    /// `KI`
    Ki,
    /// `KP`
    Kp,
    /// `KR`
    Kr,
    /// `KW`
    Kw,
    /// `KG`
    Kg,
    /// `LA`
    La,
    /// `LV`
    Lv,
    /// `LB`
    Lb,
    /// `LS`
    Ls,
    /// `LR`
    Lr,
    /// `LY`
    Ly,
    /// `LI`
    Li,
    /// `LT`
    Lt,
    /// `LU`
    Lu,
    /// `MO`
    Mo,
    /// `MK`
    Mk,
    /// `MG`
    Mg,
    /// `MW`
    Mw,
    /// `MY`
    My,
    /// `MV`
    Mv,
    /// `ML`
    Ml,
    /// `MT`
    Mt,
    /// `MH`
    Mh,
    /// `MQ`
    Mq,
    /// `MR`
    Mr,
    /// `MU`
    Mu,
    /// `YT`
    Yt,
    /// `MX`
    Mx,
    /// `FM`
    Fm,
    /// `MD`
    Md,
    /// `MC`
    Mc,
    /// `MN`
    Mn,
    /// `ME`
    Me,
    /// `MS`
    Ms,
    /// `MA`
    Ma,
    /// `MZ`
    Mz,
    /// `MM`
    Mm,
    /// `NA`
    Na,
    /// `NR`
    Nr,
    /// `NP`
    Np,
    /// `NL`
    Nl,
    /// `NC`
    Nc,
    /// `NZ`
    Nz,
    /// `NI`
    Ni,
    /// `NE`
    Ne,
    /// `NG`
    Ng,
    /// `NU`
    Nu,
    /// `NF`
    Nf,
    /// `MP`
    Mp,
    /// `NO`
    No,
    /// `OM`
    Om,
    /// `PK`
    Pk,
    /// `PW`
    Pw,
    /// `PS`
    Ps,
    /// `PA`
    Pa,
    /// `PG`
    Pg,
    /// `PY`
    Py,
    /// `PE`
    Pe,
    /// `PH`
    Ph,
    /// `PN`
    Pn,
    /// `PL`
    Pl,
    /// `PT`
    Pt,
    /// `PR`
    Pr,
    /// `QA`
    Qa,
    /// `RE`
    Re,
    /// `RO`
    Ro,
    /// `RU`
    Ru,
    /// `RW`
    Rw,
    /// `BL`
    Bl,
    /// `SH`
    Sh,
    /// `KN`
    Kn,
    /// `LC`
    Lc,
    /// `MF`
    Mf,
    /// `PM`
    Pm,
    /// `VC`
    Vc,
    /// `WS`
    Ws,
    /// `SM`
    Sm,
    /// `ST`
    St,
    /// `SA`
    Sa,
    /// `SN`
    Sn,
    /// `RS`
    Rs,
    /// `SC`
    Sc,
    /// `SL`
    Sl,
    /// `SG`
    Sg,
    /// `SX`
    Sx,
    /// `SK`
    Sk,
    /// `SI`
    Si,
    /// `SB`
    Sb,
    /// `SO`
    So,
    /// `ZA`
    Za,
    /// `GS`
    Gs,
    /// `SS`
    Ss,
    /// `ES`
    Es,
    /// `LK`
    Lk,
    /// `SD`
    Sd,
    /// `SR`
    Sr,
    /// `SJ`
    Sj,
    /// `SZ`
    Sz,
    /// `SE`
    Se,
    /// `CH`
    Ch,
    /// `SY`
    Sy,
    /// `TW`
    Tw,
    /// `TJ`
    Tj,
    /// `TZ`
    Tz,
    /// `TH`
    Th,
    /// `TL`
    Tl,
    /// `TG`
    Tg,
    /// `TK`
    Tk,
    /// `TO`
    To,
    /// `TT`
    Tt,
    /// `TN`
    Tn,
    /// `TR`
    Tr,
    /// `TM`
    Tm,
    /// `TC`
    Tc,
    /// `TV`
    Tv,
    /// `UG`
    Ug,
    /// `UA`
    Ua,
    /// `AE`
    Ae,
    /// `GB`
    Gb,
    /// `US`
    Us,
    /// `UM`
    Um,
    /// `UY`
    Uy,
    /// `UZ`
    Uz,
    /// `VU`
    Vu,
    /// `VE`
    Ve,
    /// `VN`
    Vn,
    /// `VG`
    Vg,
    /// `VI`
    Vi,
    /// `WF`
    Wf,
    /// `EH`
    Eh,
    /// `YE`
    Ye,
    /// `ZM`
    Zm,
    /// `ZW`
    Zw,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl GeoMatchConstraintValue {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &[
        "AF", "AX", "AL", "DZ", "AS", "AD", "AO", "AI", "AQ", "AG", "AR", "AM", "AW", "AU", "AT",
        "AZ", "BS", "BH", "BD", "BB", "BY", "BE", "BZ", "BJ", "BM", "BT", "BO", "BQ", "BA", "BW",
        "BV", "BR", "IO", "BN", "BG", "BF", "BI", "KH", "CM", "CA", "CV", "KY", "CF", "TD", "CL",
        "CN", "CX", "CC", "CO", "KM", "CG", "CD", "CK", "CR", "CI", "HR", "CU", "CW", "CY", "CZ",
        "DK", "DJ", "DM", "DO", "EC", "EG", "SV", "GQ", "ER", "EE", "ET", "FK", "FO", "FJ", "FI",
        "FR", "GF", "PF", "TF", "GA", "GM", "GE", "DE", "GH", "GI", "GR", "GL", "GD", "GP", "GU",
        "GT", "GG", "GN", "GW", "GY", "HT", "HM", "VA", "HN", "HK", "HU", "IS", "IN", "ID", "IR",
        "IQ", "IE", "IM", "IL", "IT", "JM", "JP", "JE", "JO", "KZ", "KE", "KI", "KP", "KR", "KW",
        "KG", "LA", "LV", "LB", "LS", "LR", "LY", "LI", "LT", "LU", "MO", "MK", "MG", "MW", "MY",
        "MV", "ML", "MT", "MH", "MQ", "MR", "MU", "YT", "MX", "FM", "MD", "MC", "MN", "ME", "MS",
        "MA", "MZ", "MM", "NA", "NR", "NP", "NL", "NC", "NZ", "NI", "NE", "NG", "NU", "NF", "MP",
        "NO", "OM", "PK", "PW", "PS", "PA", "PG", "PY", "PE", "PH", "PN", "PL", "PT", "PR", "QA",
        "RE", "RO", "RU", "RW", "BL", "SH", "KN", "LC", "MF", "PM", "VC", "WS", "SM", "ST", "SA",
        "SN", "RS", "SC", "SL", "SG", "SX", "SK", "SI", "SB", "SO", "ZA", "GS", "SS", "ES", "LK",
        "SD", "SR", "SJ", "SZ", "SE", "CH", "SY", "TW", "TJ", "TZ", "TH", "TL", "TG", "TK", "TO",
        "TT", "TN", "TR", "TM", "TC", "TV", "UG", "UA", "AE", "GB", "US", "UM", "UY", "UZ", "VU",
        "VE", "VN", "VG", "VI", "WF", "EH", "YE", "ZM", "ZW",
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Af => "AF",
            Self::Ax => "AX",
            Self::Al => "AL",
            Self::Dz => "DZ",
            Self::As => "AS",
            Self::Ad => "AD",
            Self::Ao => "AO",
            Self::Ai => "AI",
            Self::Aq => "AQ",
            Self::Ag => "AG",
            Self::Ar => "AR",
            Self::Am => "AM",
            Self::Aw => "AW",
            Self::Au => "AU",
            Self::At => "AT",
            Self::Az => "AZ",
            Self::Bs => "BS",
            Self::Bh => "BH",
            Self::Bd => "BD",
            Self::Bb => "BB",
            Self::By => "BY",
            Self::Be => "BE",
            Self::Bz => "BZ",
            Self::Bj => "BJ",
            Self::Bm => "BM",
            Self::Bt => "BT",
            Self::Bo => "BO",
            Self::Bq => "BQ",
            Self::Ba => "BA",
            Self::Bw => "BW",
            Self::Bv => "BV",
            Self::Br => "BR",
            Self::Io => "IO",
            Self::Bn => "BN",
            Self::Bg => "BG",
            Self::Bf => "BF",
            Self::Bi => "BI",
            Self::Kh => "KH",
            Self::Cm => "CM",
            Self::Ca => "CA",
            Self::Cv => "CV",
            Self::Ky => "KY",
            Self::Cf => "CF",
            Self::Td => "TD",
            Self::Cl => "CL",
            Self::Cn => "CN",
            Self::Cx => "CX",
            Self::Cc => "CC",
            Self::Co => "CO",
            Self::Km => "KM",
            Self::Cg => "CG",
            Self::Cd => "CD",
            Self::Ck => "CK",
            Self::Cr => "CR",
            Self::Ci => "CI",
            Self::Hr => "HR",
            Self::Cu => "CU",
            Self::Cw => "CW",
            Self::Cy => "CY",
            Self::Cz => "CZ",
            Self::Dk => "DK",
            Self::Dj => "DJ",
            Self::Dm => "DM",
            Self::Do => "DO",
            Self::Ec => "EC",
            Self::Eg => "EG",
            Self::Sv => "SV",
            Self::Gq => "GQ",
            Self::Er => "ER",
            Self::Ee => "EE",
            Self::Et => "ET",
            Self::Fk => "FK",
            Self::Fo => "FO",
            Self::Fj => "FJ",
            Self::Fi => "FI",
            Self::Fr => "FR",
            Self::Gf => "GF",
            Self::Pf => "PF",
            Self::Tf => "TF",
            Self::Ga => "GA",
            Self::Gm => "GM",
            Self::Ge => "GE",
            Self::De => "DE",
            Self::Gh => "GH",
            Self::Gi => "GI",
            Self::Gr => "GR",
            Self::Gl => "GL",
            Self::Gd => "GD",
            Self::Gp => "GP",
            Self::Gu => "GU",
            Self::Gt => "GT",
            Self::Gg => "GG",
            Self::Gn => "GN",
            Self::Gw => "GW",
            Self::Gy => "GY",
            Self::Ht => "HT",
            Self::Hm => "HM",
            Self::Va => "VA",
            Self::Hn => "HN",
            Self::Hk => "HK",
            Self::Hu => "HU",
            Self::Is => "IS",
            Self::In => "IN",
            Self::Id => "ID",
            Self::Ir => "IR",
            Self::Iq => "IQ",
            Self::Ie => "IE",
            Self::Im => "IM",
            Self::Il => "IL",
            Self::It => "IT",
            Self::Jm => "JM",
            Self::Jp => "JP",
            Self::Je => "JE",
            Self::Jo => "JO",
            Self::Kz => "KZ",
            Self::Ke => "KE",
            Self::Ki => "KI",
            Self::Kp => "KP",
            Self::Kr => "KR",
            Self::Kw => "KW",
            Self::Kg => "KG",
            Self::La => "LA",
            Self::Lv => "LV",
            Self::Lb => "LB",
            Self::Ls => "LS",
            Self::Lr => "LR",
            Self::Ly => "LY",
            Self::Li => "LI",
            Self::Lt => "LT",
            Self::Lu => "LU",
            Self::Mo => "MO",
            Self::Mk => "MK",
            Self::Mg => "MG",
            Self::Mw => "MW",
            Self::My => "MY",
            Self::Mv => "MV",
            Self::Ml => "ML",
            Self::Mt => "MT",
            Self::Mh => "MH",
            Self::Mq => "MQ",
            Self::Mr => "MR",
            Self::Mu => "MU",
            Self::Yt => "YT",
            Self::Mx => "MX",
            Self::Fm => "FM",
            Self::Md => "MD",
            Self::Mc => "MC",
            Self::Mn => "MN",
            Self::Me => "ME",
            Self::Ms => "MS",
            Self::Ma => "MA",
            Self::Mz => "MZ",
            Self::Mm => "MM",
            Self::Na => "NA",
            Self::Nr => "NR",
            Self::Np => "NP",
            Self::Nl => "NL",
            Self::Nc => "NC",
            Self::Nz => "NZ",
            Self::Ni => "NI",
            Self::Ne => "NE",
            Self::Ng => "NG",
            Self::Nu => "NU",
            Self::Nf => "NF",
            Self::Mp => "MP",
            Self::No => "NO",
            Self::Om => "OM",
            Self::Pk => "PK",
            Self::Pw => "PW",
            Self::Ps => "PS",
            Self::Pa => "PA",
            Self::Pg => "PG",
            Self::Py => "PY",
            Self::Pe => "PE",
            Self::Ph => "PH",
            Self::Pn => "PN",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Pr => "PR",
            Self::Qa => "QA",
            Self::Re => "RE",
            Self::Ro => "RO",
            Self::Ru => "RU",
            Self::Rw => "RW",
            Self::Bl => "BL",
            Self::Sh => "SH",
            Self::Kn => "KN",
            Self::Lc => "LC",
            Self::Mf => "MF",
            Self::Pm => "PM",
            Self::Vc => "VC",
            Self::Ws => "WS",
            Self::Sm => "SM",
            Self::St => "ST",
            Self::Sa => "SA",
            Self::Sn => "SN",
            Self::Rs => "RS",
            Self::Sc => "SC",
            Self::Sl => "SL",
            Self::Sg => "SG",
            Self::Sx => "SX",
            Self::Sk => "SK",
            Self::Si => "SI",
            Self::Sb => "SB",
            Self::So => "SO",
            Self::Za => "ZA",
            Self::Gs => "GS",
            Self::Ss => "SS",
            Self::Es => "ES",
            Self::Lk => "LK",
            Self::Sd => "SD",
            Self::Sr => "SR",
            Self::Sj => "SJ",
            Self::Sz => "SZ",
            Self::Se => "SE",
            Self::Ch => "CH",
            Self::Sy => "SY",
            Self::Tw => "TW",
            Self::Tj => "TJ",
            Self::Tz => "TZ",
            Self::Th => "TH",
            Self::Tl => "TL",
            Self::Tg => "TG",
            Self::Tk => "TK",
            Self::To => "TO",
            Self::Tt => "TT",
            Self::Tn => "TN",
            Self::Tr => "TR",
            Self::Tm => "TM",
            Self::Tc => "TC",
            Self::Tv => "TV",
            Self::Ug => "UG",
            Self::Ua => "UA",
            Self::Ae => "AE",
            Self::Gb => "GB",
            Self::Us => "US",
            Self::Um => "UM",
            Self::Uy => "UY",
            Self::Uz => "UZ",
            Self::Vu => "VU",
            Self::Ve => "VE",
            Self::Vn => "VN",
            Self::Vg => "VG",
            Self::Vi => "VI",
            Self::Wf => "WF",
            Self::Eh => "EH",
            Self::Ye => "YE",
            Self::Zm => "ZM",
            Self::Zw => "ZW",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for GeoMatchConstraintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GeoMatchConstraintValue {
    fn from(s: &str) -> Self {
        match s {
            "AF" => Self::Af,
            "AX" => Self::Ax,
            "AL" => Self::Al,
            "DZ" => Self::Dz,
            "AS" => Self::As,
            "AD" => Self::Ad,
            "AO" => Self::Ao,
            "AI" => Self::Ai,
            "AQ" => Self::Aq,
            "AG" => Self::Ag,
            "AR" => Self::Ar,
            "AM" => Self::Am,
            "AW" => Self::Aw,
            "AU" => Self::Au,
            "AT" => Self::At,
            "AZ" => Self::Az,
            "BS" => Self::Bs,
            "BH" => Self::Bh,
            "BD" => Self::Bd,
            "BB" => Self::Bb,
            "BY" => Self::By,
            "BE" => Self::Be,
            "BZ" => Self::Bz,
            "BJ" => Self::Bj,
            "BM" => Self::Bm,
            "BT" => Self::Bt,
            "BO" => Self::Bo,
            "BQ" => Self::Bq,
            "BA" => Self::Ba,
            "BW" => Self::Bw,
            "BV" => Self::Bv,
            "BR" => Self::Br,
            "IO" => Self::Io,
            "BN" => Self::Bn,
            "BG" => Self::Bg,
            "BF" => Self::Bf,
            "BI" => Self::Bi,
            "KH" => Self::Kh,
            "CM" => Self::Cm,
            "CA" => Self::Ca,
            "CV" => Self::Cv,
            "KY" => Self::Ky,
            "CF" => Self::Cf,
            "TD" => Self::Td,
            "CL" => Self::Cl,
            "CN" => Self::Cn,
            "CX" => Self::Cx,
            "CC" => Self::Cc,
            "CO" => Self::Co,
            "KM" => Self::Km,
            "CG" => Self::Cg,
            "CD" => Self::Cd,
            "CK" => Self::Ck,
            "CR" => Self::Cr,
            "CI" => Self::Ci,
            "HR" => Self::Hr,
            "CU" => Self::Cu,
            "CW" => Self::Cw,
            "CY" => Self::Cy,
            "CZ" => Self::Cz,
            "DK" => Self::Dk,
            "DJ" => Self::Dj,
            "DM" => Self::Dm,
            "DO" => Self::Do,
            "EC" => Self::Ec,
            "EG" => Self::Eg,
            "SV" => Self::Sv,
            "GQ" => Self::Gq,
            "ER" => Self::Er,
            "EE" => Self::Ee,
            "ET" => Self::Et,
            "FK" => Self::Fk,
            "FO" => Self::Fo,
            "FJ" => Self::Fj,
            "FI" => Self::Fi,
            "FR" => Self::Fr,
            "GF" => Self::Gf,
            "PF" => Self::Pf,
            "TF" => Self::Tf,
            "GA" => Self::Ga,
            "GM" => Self::Gm,
            "GE" => Self::Ge,
            "DE" => Self::De,
            "GH" => Self::Gh,
            "GI" => Self::Gi,
            "GR" => Self::Gr,
            "GL" => Self::Gl,
            "GD" => Self::Gd,
            "GP" => Self::Gp,
            "GU" => Self::Gu,
            "GT" => Self::Gt,
            "GG" => Self::Gg,
            "GN" => Self::Gn,
            "GW" => Self::Gw,
            "GY" => Self::Gy,
            "HT" => Self::Ht,
            "HM" => Self::Hm,
            "VA" => Self::Va,
            "HN" => Self::Hn,
            "HK" => Self::Hk,
            "HU" => Self::Hu,
            "IS" => Self::Is,
            "IN" => Self::In,
            "ID" => Self::Id,
            "IR" => Self::Ir,
            "IQ" => Self::Iq,
            "IE" => Self::Ie,
            "IM" => Self::Im,
            "IL" => Self::Il,
            "IT" => Self::It,
            "JM" => Self::Jm,
            "JP" => Self::Jp,
            "JE" => Self::Je,
            "JO" => Self::Jo,
            "KZ" => Self::Kz,
            "KE" => Self::Ke,
            "KI" => Self::Ki,
            "KP" => Self::Kp,
            "KR" => Self::Kr,
            "KW" => Self::Kw,
            "KG" => Self::Kg,
            "LA" => Self::La,
            "LV" => Self::Lv,
            "LB" => Self::Lb,
            "LS" => Self::Ls,
            "LR" => Self::Lr,
            "LY" => Self::Ly,
            "LI" => Self::Li,
            "LT" => Self::Lt,
            "LU" => Self::Lu,
            "MO" => Self::Mo,
            "MK" => Self::Mk,
            "MG" => Self::Mg,
            "MW" => Self::Mw,
            "MY" => Self::My,
            "MV" => Self::Mv,
            "ML" => Self::Ml,
            "MT" => Self::Mt,
            "MH" => Self::Mh,
            "MQ" => Self::Mq,
            "MR" => Self::Mr,
            "MU" => Self::Mu,
            "YT" => Self::Yt,
            "MX" => Self::Mx,
            "FM" => Self::Fm,
            "MD" => Self::Md,
            "MC" => Self::Mc,
            "MN" => Self::Mn,
            "ME" => Self::Me,
            "MS" => Self::Ms,
            "MA" => Self::Ma,
            "MZ" => Self::Mz,
            "MM" => Self::Mm,
            "NA" => Self::Na,
            "NR" => Self::Nr,
            "NP" => Self::Np,
            "NL" => Self::Nl,
            "NC" => Self::Nc,
            "NZ" => Self::Nz,
            "NI" => Self::Ni,
            "NE" => Self::Ne,
            "NG" => Self::Ng,
            "NU" => Self::Nu,
            "NF" => Self::Nf,
            "MP" => Self::Mp,
            "NO" => Self::No,
            "OM" => Self::Om,
            "PK" => Self::Pk,
            "PW" => Self::Pw,
            "PS" => Self::Ps,
            "PA" => Self::Pa,
            "PG" => Self::Pg,
            "PY" => Self::Py,
            "PE" => Self::Pe,
            "PH" => Self::Ph,
            "PN" => Self::Pn,
            "PL" => Self::Pl,
            "PT" => Self::Pt,
            "PR" => Self::Pr,
            "QA" => Self::Qa,
            "RE" => Self::Re,
            "RO" => Self::Ro,
            "RU" => Self::Ru,
            "RW" => Self::Rw,
            "BL" => Self::Bl,
            "SH" => Self::Sh,
            "KN" => Self::Kn,
            "LC" => Self::Lc,
            "MF" => Self::Mf,
            "PM" => Self::Pm,
            "VC" => Self::Vc,
            "WS" => Self::Ws,
            "SM" => Self::Sm,
            "ST" => Self::St,
            "SA" => Self::Sa,
            "SN" => Self::Sn,
            "RS" => Self::Rs,
            "SC" => Self::Sc,
            "SL" => Self::Sl,
            "SG" => Self::Sg,
            "SX" => Self::Sx,
            "SK" => Self::Sk,
            "SI" => Self::Si,
            "SB" => Self::Sb,
            "SO" => Self::So,
            "ZA" => Self::Za,
            "GS" => Self::Gs,
            "SS" => Self::Ss,
            "ES" => Self::Es,
            "LK" => Self::Lk,
            "SD" => Self::Sd,
            "SR" => Self::Sr,
            "SJ" => Self::Sj,
            "SZ" => Self::Sz,
            "SE" => Self::Se,
            "CH" => Self::Ch,
            "SY" => Self::Sy,
            "TW" => Self::Tw,
            "TJ" => Self::Tj,
            "TZ" => Self::Tz,
            "TH" => Self::Th,
            "TL" => Self::Tl,
            "TG" => Self::Tg,
            "TK" => Self::Tk,
            "TO" => Self::To,
            "TT" => Self::Tt,
            "TN" => Self::Tn,
            "TR" => Self::Tr,
            "TM" => Self::Tm,
            "TC" => Self::Tc,
            "TV" => Self::Tv,
            "UG" => Self::Ug,
            "UA" => Self::Ua,
            "AE" => Self::Ae,
            "GB" => Self::Gb,
            "US" => Self::Us,
            "UM" => Self::Um,
            "UY" => Self::Uy,
            "UZ" => Self::Uz,
            "VU" => Self::Vu,
            "VE" => Self::Ve,
            "VN" => Self::Vn,
            "VG" => Self::Vg,
            "VI" => Self::Vi,
            "WF" => Self::Wf,
            "EH" => Self::Eh,
            "YE" => Self::Ye,
            "ZM" => Self::Zm,
            "ZW" => Self::Zw,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for GeoMatchConstraintValue {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for GeoMatchConstraintValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GeoMatchConstraintValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for GeoMatchConstraintValue {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `IPSetDescriptorType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IPSetDescriptorType {
    /// `IPV4`
    Ipv4,
    /// `IPV6`
    Ipv6,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl IPSetDescriptorType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["IPV4", "IPV6"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ipv4 => "IPV4",
            Self::Ipv6 => "IPV6",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for IPSetDescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IPSetDescriptorType {
    fn from(s: &str) -> Self {
        match s {
            "IPV4" => Self::Ipv4,
            "IPV6" => Self::Ipv6,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for IPSetDescriptorType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for IPSetDescriptorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IPSetDescriptorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for IPSetDescriptorType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `MatchFieldType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchFieldType {
    /// `URI`
    Uri,
    /// `QUERY_STRING`
    QueryString,
    /// `HEADER`
    Header,
    /// `METHOD`
    Method,
    /// `BODY`
    Body,
    /// `SINGLE_QUERY_ARG`
    SingleQueryArg,
    /// `ALL_QUERY_ARGS`
    AllQueryArgs,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl MatchFieldType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &[
        "URI",
        "QUERY_STRING",
        "HEADER",
        "METHOD",
        "BODY",
        "SINGLE_QUERY_ARG",
        "ALL_QUERY_ARGS",
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uri => "URI",
            Self::QueryString => "QUERY_STRING",
            Self::Header => "HEADER",
            Self::Method => "METHOD",
            Self::Body => "BODY",
            Self::SingleQueryArg => "SINGLE_QUERY_ARG",
            Self::AllQueryArgs => "ALL_QUERY_ARGS",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for MatchFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MatchFieldType {
    fn from(s: &str) -> Self {
        match s {
            "URI" => Self::Uri,
            "QUERY_STRING" => Self::QueryString,
            "HEADER" => Self::Header,
            "METHOD" => Self::Method,
            "BODY" => Self::Body,
            "SINGLE_QUERY_ARG" => Self::SingleQueryArg,
            "ALL_QUERY_ARGS" => Self::AllQueryArgs,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for MatchFieldType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for MatchFieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchFieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for MatchFieldType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `PredicateType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PredicateType {
    /// `IPMatch`
    IpMatch,
    /// `ByteMatch`
    ByteMatch,
    /// `SqlInjectionMatch`
    SqlInjectionMatch,
    /// `GeoMatch`
    GeoMatch,
    /// `SizeConstraint`
    SizeConstraint,
    /// `XssMatch`
    XssMatch,
    /// `RegexMatch`
    RegexMatch,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl PredicateType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &[
        "IPMatch",
        "ByteMatch",
        "SqlInjectionMatch",
        "GeoMatch",
        "SizeConstraint",
        "XssMatch",
        "RegexMatch",
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::IpMatch => "IPMatch",
            Self::ByteMatch => "ByteMatch",
            Self::SqlInjectionMatch => "SqlInjectionMatch",
            Self::GeoMatch => "GeoMatch",
            Self::SizeConstraint => "SizeConstraint",
            Self::XssMatch => "XssMatch",
            Self::RegexMatch => "RegexMatch",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for PredicateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PredicateType {
    fn from(s: &str) -> Self {
        match s {
            "IPMatch" => Self::IpMatch,
            "ByteMatch" => Self::ByteMatch,
            "SqlInjectionMatch" => Self::SqlInjectionMatch,
            "GeoMatch" => Self::GeoMatch,
            "SizeConstraint" => Self::SizeConstraint,
            "XssMatch" => Self::XssMatch,
            "RegexMatch" => Self::RegexMatch,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for PredicateType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for PredicateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PredicateType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for PredicateType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// The field that WAF uses to aggregate requests for a rate-based rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RateKey {
    /// `IP`
    Ip,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl RateKey {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["IP"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ip => "IP",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RateKey {
    fn from(s: &str) -> Self {
        match s {
            "IP" => Self::Ip,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for RateKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for RateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for RateKey {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// Text transformations applied to a request component before inspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextTransformation {
    /// `NONE`
    None,
    /// `COMPRESS_WHITE_SPACE`
    CompressWhiteSpace,
    /// `HTML_ENTITY_DECODE`
    HtmlEntityDecode,
    /// `LOWERCASE`
    Lowercase,
    /// `CMD_LINE`
    CmdLine,
    /// `URL_DECODE`
    UrlDecode,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl TextTransformation {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &[
        "NONE",
        "COMPRESS_WHITE_SPACE",
        "HTML_ENTITY_DECODE",
        "LOWERCASE",
        "CMD_LINE",
        "URL_DECODE",
    ];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::CompressWhiteSpace => "COMPRESS_WHITE_SPACE",
            Self::HtmlEntityDecode => "HTML_ENTITY_DECODE",
            Self::Lowercase => "LOWERCASE",
            Self::CmdLine => "CMD_LINE",
            Self::UrlDecode => "URL_DECODE",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TextTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TextTransformation {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => Self::None,
            "COMPRESS_WHITE_SPACE" => Self::CompressWhiteSpace,
            "HTML_ENTITY_DECODE" => Self::HtmlEntityDecode,
            "LOWERCASE" => Self::Lowercase,
            "CMD_LINE" => Self::CmdLine,
            "URL_DECODE" => Self::UrlDecode,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for TextTransformation {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for TextTransformation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextTransformation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for TextTransformation {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `WafActionType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WafActionType {
    /// `BLOCK`
    Block,
    /// `ALLOW`
    Allow,
    /// `COUNT`
    Count,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl WafActionType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["BLOCK", "ALLOW", "COUNT"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Block => "BLOCK",
            Self::Allow => "ALLOW",
            Self::Count => "COUNT",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for WafActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WafActionType {
    fn from(s: &str) -> Self {
        match s {
            "BLOCK" => Self::Block,
            "ALLOW" => Self::Allow,
            "COUNT" => Self::Count,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for WafActionType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for WafActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WafActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for WafActionType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `WafOverrideActionType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WafOverrideActionType {
    /// `NONE`
    None,
    /// `COUNT`
    Count,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl WafOverrideActionType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["NONE", "COUNT"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::Count => "COUNT",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for WafOverrideActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WafOverrideActionType {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => Self::None,
            "COUNT" => Self::Count,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for WafOverrideActionType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for WafOverrideActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WafOverrideActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for WafOverrideActionType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// AWS WAF Regional `WafRuleType` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WafRuleType {
    /// `REGULAR`
    Regular,
    /// `RATE_BASED`
    RateBased,
    /// `GROUP`
    Group,
    /// A value not known to this version of the model.
    Unknown(UnknownVariantValue),
}

impl WafRuleType {
    /// Wire values of every modeled variant, in declaration order.
    pub const VALUES: &[&str] = &["REGULAR", "RATE_BASED", "GROUP"];

    /// Returns the wire value of this variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Regular => "REGULAR",
            Self::RateBased => "RATE_BASED",
            Self::Group => "GROUP",
            Self::Unknown(value) => value.as_str(),
        }
    }

    /// Whether this is a modeled variant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for WafRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WafRuleType {
    fn from(s: &str) -> Self {
        match s {
            "REGULAR" => Self::Regular,
            "RATE_BASED" => Self::RateBased,
            "GROUP" => Self::Group,
            other => Self::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl From<String> for WafRuleType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for WafRuleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WafRuleType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl AsMemberValue for WafRuleType {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Enum(self.as_str())
    }
}

/// A rule placed in a web ACL together with its priority and action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivatedRule {
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    priority: Option<i32>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<WafAction>,
    #[serde(rename = "OverrideAction", skip_serializing_if = "Option::is_none")]
    override_action: Option<WafOverrideAction>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<WafRuleType>,
    #[serde(rename = "ExcludedRules", skip_serializing_if = "Option::is_none")]
    excluded_rules: Option<Vec<ExcludedRule>>,
}

impl ActivatedRule {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &ACTIVATED_RULE_SCHEMA
    }

    /// Evaluation order within the web ACL; lower values run first.
    ///
    /// Required by the service.
    #[must_use]
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// Sets `Priority`; `None` clears it.
    pub fn set_priority(&mut self, input: Option<i32>) -> &mut Self {
        self.priority = input;
        self
    }

    /// Sets `Priority` and returns the updated value.
    #[must_use]
    pub fn with_priority(mut self, input: i32) -> Self {
        self.priority = Some(input);
        self
    }

    /// The `RuleId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Sets `RuleId`; `None` clears it.
    pub fn set_rule_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_id = input;
        self
    }

    /// Sets `RuleId` and returns the updated value.
    #[must_use]
    pub fn with_rule_id(mut self, input: impl Into<String>) -> Self {
        self.rule_id = Some(input.into());
        self
    }

    /// The action taken when a request matches a rule or no rule matches.
    #[must_use]
    pub fn action(&self) -> Option<&WafAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<WafAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: WafAction) -> Self {
        self.action = Some(input);
        self
    }

    /// Overrides the actions of the rules inside a rule group.
    #[must_use]
    pub fn override_action(&self) -> Option<&WafOverrideAction> {
        self.override_action.as_ref()
    }

    /// Sets `OverrideAction`; `None` clears it.
    pub fn set_override_action(&mut self, input: Option<WafOverrideAction>) -> &mut Self {
        self.override_action = input;
        self
    }

    /// Sets `OverrideAction` and returns the updated value.
    #[must_use]
    pub fn with_override_action(mut self, input: WafOverrideAction) -> Self {
        self.override_action = Some(input);
        self
    }

    /// The `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&WafRuleType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<WafRuleType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<WafRuleType>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    /// The `ExcludedRules` member.
    #[must_use]
    pub fn excluded_rules(&self) -> Option<&[ExcludedRule]> {
        self.excluded_rules.as_deref()
    }

    /// Sets `ExcludedRules`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_excluded_rules(&mut self, input: Option<&[ExcludedRule]>) -> &mut Self {
        self.excluded_rules = input.map(<[ExcludedRule]>::to_vec);
        self
    }

    /// Sets `ExcludedRules` and returns the updated value.
    #[must_use]
    pub fn with_excluded_rules(mut self, input: &[ExcludedRule]) -> Self {
        self.excluded_rules = Some(input.to_vec());
        self
    }

    /// Appends to `ExcludedRules`, creating the list if it is unset.
    #[must_use]
    pub fn append_excluded_rules(mut self, items: impl IntoIterator<Item = ExcludedRule>) -> Self {
        let list = self.excluded_rules.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for ActivatedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for ActivatedRule {
    fn schema(&self) -> &'static ShapeSchema {
        &ACTIVATED_RULE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Priority" => schema::value_of(self.priority.as_ref()),
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "Action" => schema::value_of(self.action.as_ref()),
            "OverrideAction" => schema::value_of(self.override_action.as_ref()),
            "Type" => schema::value_of(self.r#type.as_ref()),
            "ExcludedRules" => schema::value_of(self.excluded_rules.as_ref()),
            _ => None,
        }
    }
}

static ACTIVATED_RULE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "ActivatedRule",
    members: &[
        MemberSchema {
            name: "Priority",
            target: "RulePriority",
            kind: MemberKind::Integer,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Action",
            target: "WafAction",
            kind: MemberKind::Structure,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "OverrideAction",
            target: "WafOverrideAction",
            kind: MemberKind::Structure,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Type",
            target: "WafRuleType",
            kind: MemberKind::Enum(WafRuleType::VALUES),
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "ExcludedRules",
            target: "ExcludedRules",
            kind: MemberKind::List(&ItemSchema {
                target: "ExcludedRule",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: Constraints::NONE,
        },
    ],
};

/// A rule inside a rule group that is excluded from blocking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExcludedRule {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
}

impl ExcludedRule {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &EXCLUDED_RULE_SCHEMA
    }

    /// The `RuleId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Sets `RuleId`; `None` clears it.
    pub fn set_rule_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_id = input;
        self
    }

    /// Sets `RuleId` and returns the updated value.
    #[must_use]
    pub fn with_rule_id(mut self, input: impl Into<String>) -> Self {
        self.rule_id = Some(input.into());
        self
    }
}

impl fmt::Display for ExcludedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for ExcludedRule {
    fn schema(&self) -> &'static ShapeSchema {
        &EXCLUDED_RULE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            _ => None,
        }
    }
}

static EXCLUDED_RULE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "ExcludedRule",
    members: &[MemberSchema {
        name: "RuleId",
        target: "ResourceId",
        kind: MemberKind::String,
        required: true,
        constraints: constraints::RESOURCE_ID,
    }],
};

/// The part of a web request that WAF inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldToMatch {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<MatchFieldType>,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl FieldToMatch {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &FIELD_TO_MATCH_SCHEMA
    }

    /// The part of the web request to inspect.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&MatchFieldType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<MatchFieldType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<MatchFieldType>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    /// Header name or query argument name when Type is HEADER or SINGLE_QUERY_ARG.
    #[must_use]
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Sets `Data`; `None` clears it.
    pub fn set_data(&mut self, input: Option<String>) -> &mut Self {
        self.data = input;
        self
    }

    /// Sets `Data` and returns the updated value.
    #[must_use]
    pub fn with_data(mut self, input: impl Into<String>) -> Self {
        self.data = Some(input.into());
        self
    }
}

impl fmt::Display for FieldToMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for FieldToMatch {
    fn schema(&self) -> &'static ShapeSchema {
        &FIELD_TO_MATCH_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Type" => schema::value_of(self.r#type.as_ref()),
            "Data" => schema::value_of(self.data.as_ref()),
            _ => None,
        }
    }
}

static FIELD_TO_MATCH_SCHEMA: ShapeSchema = ShapeSchema {
    name: "FieldToMatch",
    members: &[
        MemberSchema {
            name: "Type",
            target: "MatchFieldType",
            kind: MemberKind::Enum(MatchFieldType::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Data",
            target: "MatchFieldData",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::MATCH_FIELD_DATA,
        },
    ],
};

/// The country that WAF searches for in a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoMatchConstraint {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<GeoMatchConstraintType>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<GeoMatchConstraintValue>,
}

impl GeoMatchConstraint {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GEO_MATCH_CONSTRAINT_SCHEMA
    }

    /// The `Type` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&GeoMatchConstraintType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<GeoMatchConstraintType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<GeoMatchConstraintType>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    /// ISO 3166-1 alpha-2 country codes accepted by a geo match constraint.
    ///
    /// Required by the service.
    #[must_use]
    pub fn value(&self) -> Option<&GeoMatchConstraintValue> {
        self.value.as_ref()
    }

    /// Sets `Value`; `None` clears it.
    pub fn set_value(&mut self, input: Option<GeoMatchConstraintValue>) -> &mut Self {
        self.value = input;
        self
    }

    /// Sets `Value` and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<GeoMatchConstraintValue>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for GeoMatchConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GeoMatchConstraint {
    fn schema(&self) -> &'static ShapeSchema {
        &GEO_MATCH_CONSTRAINT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Type" => schema::value_of(self.r#type.as_ref()),
            "Value" => schema::value_of(self.value.as_ref()),
            _ => None,
        }
    }
}

static GEO_MATCH_CONSTRAINT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GeoMatchConstraint",
    members: &[
        MemberSchema {
            name: "Type",
            target: "GeoMatchConstraintType",
            kind: MemberKind::Enum(GeoMatchConstraintType::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Value",
            target: "GeoMatchConstraintValue",
            kind: MemberKind::Enum(GeoMatchConstraintValue::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// Inserts a country into, or deletes one from, a geo match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<ChangeAction>,
    #[serde(rename = "GeoMatchConstraint", skip_serializing_if = "Option::is_none")]
    geo_match_constraint: Option<GeoMatchConstraint>,
}

impl GeoMatchSetUpdate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GEO_MATCH_SET_UPDATE_SCHEMA
    }

    /// The `Action` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<ChangeAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<ChangeAction>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// The country that WAF searches for in a request.
    ///
    /// Required by the service.
    #[must_use]
    pub fn geo_match_constraint(&self) -> Option<&GeoMatchConstraint> {
        self.geo_match_constraint.as_ref()
    }

    /// Sets `GeoMatchConstraint`; `None` clears it.
    pub fn set_geo_match_constraint(&mut self, input: Option<GeoMatchConstraint>) -> &mut Self {
        self.geo_match_constraint = input;
        self
    }

    /// Sets `GeoMatchConstraint` and returns the updated value.
    #[must_use]
    pub fn with_geo_match_constraint(mut self, input: GeoMatchConstraint) -> Self {
        self.geo_match_constraint = Some(input);
        self
    }
}

impl fmt::Display for GeoMatchSetUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GeoMatchSetUpdate {
    fn schema(&self) -> &'static ShapeSchema {
        &GEO_MATCH_SET_UPDATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Action" => schema::value_of(self.action.as_ref()),
            "GeoMatchConstraint" => schema::value_of(self.geo_match_constraint.as_ref()),
            _ => None,
        }
    }
}

static GEO_MATCH_SET_UPDATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GeoMatchSetUpdate",
    members: &[
        MemberSchema {
            name: "Action",
            target: "ChangeAction",
            kind: MemberKind::Enum(ChangeAction::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "GeoMatchConstraint",
            target: "GeoMatchConstraint",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// One header of a sampled web request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HTTPHeader {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl HTTPHeader {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &HTTP_HEADER_SCHEMA
    }

    /// The `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets `Value`; `None` clears it.
    pub fn set_value(&mut self, input: Option<String>) -> &mut Self {
        self.value = input;
        self
    }

    /// Sets `Value` and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for HTTPHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for HTTPHeader {
    fn schema(&self) -> &'static ShapeSchema {
        &HTTP_HEADER_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Name" => schema::value_of(self.name.as_ref()),
            "Value" => schema::value_of(self.value.as_ref()),
            _ => None,
        }
    }
}

static HTTP_HEADER_SCHEMA: ShapeSchema = ShapeSchema {
    name: "HTTPHeader",
    members: &[
        MemberSchema {
            name: "Name",
            target: "HeaderName",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Value",
            target: "HeaderValue",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
    ],
};

/// The components of a sampled web request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HTTPRequest {
    #[serde(rename = "ClientIP", skip_serializing_if = "Option::is_none")]
    client_ip: Option<String>,
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    #[serde(rename = "HTTPVersion", skip_serializing_if = "Option::is_none")]
    http_version: Option<String>,
    #[serde(rename = "Headers", skip_serializing_if = "Option::is_none")]
    headers: Option<Vec<HTTPHeader>>,
}

impl HTTPRequest {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &HTTP_REQUEST_SCHEMA
    }

    /// The `ClientIP` member.
    #[must_use]
    pub fn client_ip(&self) -> Option<&str> {
        self.client_ip.as_deref()
    }

    /// Sets `ClientIP`; `None` clears it.
    pub fn set_client_ip(&mut self, input: Option<String>) -> &mut Self {
        self.client_ip = input;
        self
    }

    /// Sets `ClientIP` and returns the updated value.
    #[must_use]
    pub fn with_client_ip(mut self, input: impl Into<String>) -> Self {
        self.client_ip = Some(input.into());
        self
    }

    /// The `Country` member.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Sets `Country`; `None` clears it.
    pub fn set_country(&mut self, input: Option<String>) -> &mut Self {
        self.country = input;
        self
    }

    /// Sets `Country` and returns the updated value.
    #[must_use]
    pub fn with_country(mut self, input: impl Into<String>) -> Self {
        self.country = Some(input.into());
        self
    }

    /// The `URI` member.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Sets `URI`; `None` clears it.
    pub fn set_uri(&mut self, input: Option<String>) -> &mut Self {
        self.uri = input;
        self
    }

    /// Sets `URI` and returns the updated value.
    #[must_use]
    pub fn with_uri(mut self, input: impl Into<String>) -> Self {
        self.uri = Some(input.into());
        self
    }

    /// The `Method` member.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Sets `Method`; `None` clears it.
    pub fn set_method(&mut self, input: Option<String>) -> &mut Self {
        self.method = input;
        self
    }

    /// Sets `Method` and returns the updated value.
    #[must_use]
    pub fn with_method(mut self, input: impl Into<String>) -> Self {
        self.method = Some(input.into());
        self
    }

    /// The `HTTPVersion` member.
    #[must_use]
    pub fn http_version(&self) -> Option<&str> {
        self.http_version.as_deref()
    }

    /// Sets `HTTPVersion`; `None` clears it.
    pub fn set_http_version(&mut self, input: Option<String>) -> &mut Self {
        self.http_version = input;
        self
    }

    /// Sets `HTTPVersion` and returns the updated value.
    #[must_use]
    pub fn with_http_version(mut self, input: impl Into<String>) -> Self {
        self.http_version = Some(input.into());
        self
    }

    /// The `Headers` member.
    #[must_use]
    pub fn headers(&self) -> Option<&[HTTPHeader]> {
        self.headers.as_deref()
    }

    /// Sets `Headers`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_headers(&mut self, input: Option<&[HTTPHeader]>) -> &mut Self {
        self.headers = input.map(<[HTTPHeader]>::to_vec);
        self
    }

    /// Sets `Headers` and returns the updated value.
    #[must_use]
    pub fn with_headers(mut self, input: &[HTTPHeader]) -> Self {
        self.headers = Some(input.to_vec());
        self
    }

    /// Appends to `Headers`, creating the list if it is unset.
    #[must_use]
    pub fn append_headers(mut self, items: impl IntoIterator<Item = HTTPHeader>) -> Self {
        let list = self.headers.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for HTTPRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for HTTPRequest {
    fn schema(&self) -> &'static ShapeSchema {
        &HTTP_REQUEST_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ClientIP" => schema::value_of(self.client_ip.as_ref()),
            "Country" => schema::value_of(self.country.as_ref()),
            "URI" => schema::value_of(self.uri.as_ref()),
            "Method" => schema::value_of(self.method.as_ref()),
            "HTTPVersion" => schema::value_of(self.http_version.as_ref()),
            "Headers" => schema::value_of(self.headers.as_ref()),
            _ => None,
        }
    }
}

static HTTP_REQUEST_SCHEMA: ShapeSchema = ShapeSchema {
    name: "HTTPRequest",
    members: &[
        MemberSchema {
            name: "ClientIP",
            target: "IPString",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Country",
            target: "Country",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "URI",
            target: "URIString",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Method",
            target: "HTTPMethod",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "HTTPVersion",
            target: "HTTPVersion",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Headers",
            target: "HTTPHeaders",
            kind: MemberKind::List(&ItemSchema {
                target: "HTTPHeader",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: Constraints::NONE,
        },
    ],
};

/// An IP address type and address range that web requests originate from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IPSetDescriptor {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<IPSetDescriptorType>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl IPSetDescriptor {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &IP_SET_DESCRIPTOR_SCHEMA
    }

    /// The `Type` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&IPSetDescriptorType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<IPSetDescriptorType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<IPSetDescriptorType>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    /// An address or range in CIDR notation, such as 192.0.2.44/32.
    ///
    /// Required by the service.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets `Value`; `None` clears it.
    pub fn set_value(&mut self, input: Option<String>) -> &mut Self {
        self.value = input;
        self
    }

    /// Sets `Value` and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for IPSetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for IPSetDescriptor {
    fn schema(&self) -> &'static ShapeSchema {
        &IP_SET_DESCRIPTOR_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Type" => schema::value_of(self.r#type.as_ref()),
            "Value" => schema::value_of(self.value.as_ref()),
            _ => None,
        }
    }
}

static IP_SET_DESCRIPTOR_SCHEMA: ShapeSchema = ShapeSchema {
    name: "IPSetDescriptor",
    members: &[
        MemberSchema {
            name: "Type",
            target: "IPSetDescriptorType",
            kind: MemberKind::Enum(IPSetDescriptorType::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Value",
            target: "IPSetDescriptorValue",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::IP_SET_DESCRIPTOR_VALUE,
        },
    ],
};

/// Inserts an address range into, or deletes one from, an IP set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IPSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<ChangeAction>,
    #[serde(rename = "IPSetDescriptor", skip_serializing_if = "Option::is_none")]
    ip_set_descriptor: Option<IPSetDescriptor>,
}

impl IPSetUpdate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &IP_SET_UPDATE_SCHEMA
    }

    /// The `Action` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<ChangeAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<ChangeAction>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// An IP address type and address range that web requests originate from.
    ///
    /// Required by the service.
    #[must_use]
    pub fn ip_set_descriptor(&self) -> Option<&IPSetDescriptor> {
        self.ip_set_descriptor.as_ref()
    }

    /// Sets `IPSetDescriptor`; `None` clears it.
    pub fn set_ip_set_descriptor(&mut self, input: Option<IPSetDescriptor>) -> &mut Self {
        self.ip_set_descriptor = input;
        self
    }

    /// Sets `IPSetDescriptor` and returns the updated value.
    #[must_use]
    pub fn with_ip_set_descriptor(mut self, input: IPSetDescriptor) -> Self {
        self.ip_set_descriptor = Some(input);
        self
    }
}

impl fmt::Display for IPSetUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for IPSetUpdate {
    fn schema(&self) -> &'static ShapeSchema {
        &IP_SET_UPDATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Action" => schema::value_of(self.action.as_ref()),
            "IPSetDescriptor" => schema::value_of(self.ip_set_descriptor.as_ref()),
            _ => None,
        }
    }
}

static IP_SET_UPDATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "IPSetUpdate",
    members: &[
        MemberSchema {
            name: "Action",
            target: "ChangeAction",
            kind: MemberKind::Enum(ChangeAction::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "IPSetDescriptor",
            target: "IPSetDescriptor",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// Associates a Kinesis Data Firehose stream with a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggingConfiguration {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
    #[serde(
        rename = "LogDestinationConfigs",
        skip_serializing_if = "Option::is_none"
    )]
    log_destination_configs: Option<Vec<String>>,
    #[serde(rename = "RedactedFields", skip_serializing_if = "Option::is_none")]
    redacted_fields: Option<Vec<FieldToMatch>>,
}

impl LoggingConfiguration {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &LOGGING_CONFIGURATION_SCHEMA
    }

    /// The `ResourceArn` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    /// Sets `ResourceArn`; `None` clears it.
    pub fn set_resource_arn(&mut self, input: Option<String>) -> &mut Self {
        self.resource_arn = input;
        self
    }

    /// Sets `ResourceArn` and returns the updated value.
    #[must_use]
    pub fn with_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.resource_arn = Some(input.into());
        self
    }

    /// The `LogDestinationConfigs` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn log_destination_configs(&self) -> Option<&[String]> {
        self.log_destination_configs.as_deref()
    }

    /// Sets `LogDestinationConfigs`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_log_destination_configs(&mut self, input: Option<&[String]>) -> &mut Self {
        self.log_destination_configs = input.map(<[String]>::to_vec);
        self
    }

    /// Sets `LogDestinationConfigs` and returns the updated value.
    #[must_use]
    pub fn with_log_destination_configs(mut self, input: &[String]) -> Self {
        self.log_destination_configs = Some(input.to_vec());
        self
    }

    /// Appends to `LogDestinationConfigs`, creating the list if it is unset.
    #[must_use]
    pub fn append_log_destination_configs(
        mut self,
        items: impl IntoIterator<Item = String>,
    ) -> Self {
        let list = self.log_destination_configs.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The `RedactedFields` member.
    #[must_use]
    pub fn redacted_fields(&self) -> Option<&[FieldToMatch]> {
        self.redacted_fields.as_deref()
    }

    /// Sets `RedactedFields`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_redacted_fields(&mut self, input: Option<&[FieldToMatch]>) -> &mut Self {
        self.redacted_fields = input.map(<[FieldToMatch]>::to_vec);
        self
    }

    /// Sets `RedactedFields` and returns the updated value.
    #[must_use]
    pub fn with_redacted_fields(mut self, input: &[FieldToMatch]) -> Self {
        self.redacted_fields = Some(input.to_vec());
        self
    }

    /// Appends to `RedactedFields`, creating the list if it is unset.
    #[must_use]
    pub fn append_redacted_fields(mut self, items: impl IntoIterator<Item = FieldToMatch>) -> Self {
        let list = self.redacted_fields.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for LoggingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for LoggingConfiguration {
    fn schema(&self) -> &'static ShapeSchema {
        &LOGGING_CONFIGURATION_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ResourceArn" => schema::value_of(self.resource_arn.as_ref()),
            "LogDestinationConfigs" => schema::value_of(self.log_destination_configs.as_ref()),
            "RedactedFields" => schema::value_of(self.redacted_fields.as_ref()),
            _ => None,
        }
    }
}

static LOGGING_CONFIGURATION_SCHEMA: ShapeSchema = ShapeSchema {
    name: "LoggingConfiguration",
    members: &[
        MemberSchema {
            name: "ResourceArn",
            target: "ResourceArn",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ARN,
        },
        MemberSchema {
            name: "LogDestinationConfigs",
            target: "LogDestinationConfigs",
            kind: MemberKind::List(&ItemSchema {
                target: "ResourceArn",
                kind: MemberKind::String,
                constraints: constraints::RESOURCE_ARN,
            }),
            required: true,
            constraints: constraints::LOG_DESTINATION_CONFIGS,
        },
        MemberSchema {
            name: "RedactedFields",
            target: "RedactedFields",
            kind: MemberKind::List(&ItemSchema {
                target: "FieldToMatch",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: constraints::REDACTED_FIELDS,
        },
    ],
};

/// A condition (match set) referenced from a rule, optionally negated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    #[serde(rename = "Negated", skip_serializing_if = "Option::is_none")]
    negated: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<PredicateType>,
    #[serde(rename = "DataId", skip_serializing_if = "Option::is_none")]
    data_id: Option<String>,
}

impl Predicate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &PREDICATE_SCHEMA
    }

    /// Inverts the match: the rule matches requests that do not satisfy the referenced condition.
    ///
    /// Required by the service.
    #[must_use]
    pub fn negated(&self) -> Option<bool> {
        self.negated
    }

    /// Sets `Negated`; `None` clears it.
    pub fn set_negated(&mut self, input: Option<bool>) -> &mut Self {
        self.negated = input;
        self
    }

    /// Sets `Negated` and returns the updated value.
    #[must_use]
    pub fn with_negated(mut self, input: bool) -> Self {
        self.negated = Some(input);
        self
    }

    /// The kind of condition referenced by DataId.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&PredicateType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<PredicateType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<PredicateType>) -> Self {
        self.r#type = Some(input.into());
        self
    }

    /// Identifier of the match set or constraint set this predicate references.
    ///
    /// Required by the service.
    #[must_use]
    pub fn data_id(&self) -> Option<&str> {
        self.data_id.as_deref()
    }

    /// Sets `DataId`; `None` clears it.
    pub fn set_data_id(&mut self, input: Option<String>) -> &mut Self {
        self.data_id = input;
        self
    }

    /// Sets `DataId` and returns the updated value.
    #[must_use]
    pub fn with_data_id(mut self, input: impl Into<String>) -> Self {
        self.data_id = Some(input.into());
        self
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for Predicate {
    fn schema(&self) -> &'static ShapeSchema {
        &PREDICATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Negated" => schema::value_of(self.negated.as_ref()),
            "Type" => schema::value_of(self.r#type.as_ref()),
            "DataId" => schema::value_of(self.data_id.as_ref()),
            _ => None,
        }
    }
}

static PREDICATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "Predicate",
    members: &[
        MemberSchema {
            name: "Negated",
            target: "Negated",
            kind: MemberKind::Boolean,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Type",
            target: "PredicateType",
            kind: MemberKind::Enum(PredicateType::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "DataId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
    ],
};

/// A rule that counts requests per originating IP address and acts when the rate exceeds RateLimit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateBasedRule {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "MatchPredicates", skip_serializing_if = "Option::is_none")]
    match_predicates: Option<Vec<Predicate>>,
    #[serde(rename = "RateKey", skip_serializing_if = "Option::is_none")]
    rate_key: Option<RateKey>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    rate_limit: Option<i64>,
}

impl RateBasedRule {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &RATE_BASED_RULE_SCHEMA
    }

    /// The `RuleId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Sets `RuleId`; `None` clears it.
    pub fn set_rule_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_id = input;
        self
    }

    /// Sets `RuleId` and returns the updated value.
    #[must_use]
    pub fn with_rule_id(mut self, input: impl Into<String>) -> Self {
        self.rule_id = Some(input.into());
        self
    }

    /// The `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The `MatchPredicates` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn match_predicates(&self) -> Option<&[Predicate]> {
        self.match_predicates.as_deref()
    }

    /// Sets `MatchPredicates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_match_predicates(&mut self, input: Option<&[Predicate]>) -> &mut Self {
        self.match_predicates = input.map(<[Predicate]>::to_vec);
        self
    }

    /// Sets `MatchPredicates` and returns the updated value.
    #[must_use]
    pub fn with_match_predicates(mut self, input: &[Predicate]) -> Self {
        self.match_predicates = Some(input.to_vec());
        self
    }

    /// Appends to `MatchPredicates`, creating the list if it is unset.
    #[must_use]
    pub fn append_match_predicates(mut self, items: impl IntoIterator<Item = Predicate>) -> Self {
        let list = self.match_predicates.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The field that WAF uses to aggregate requests for a rate-based rule.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rate_key(&self) -> Option<&RateKey> {
        self.rate_key.as_ref()
    }

    /// Sets `RateKey`; `None` clears it.
    pub fn set_rate_key(&mut self, input: Option<RateKey>) -> &mut Self {
        self.rate_key = input;
        self
    }

    /// Sets `RateKey` and returns the updated value.
    #[must_use]
    pub fn with_rate_key(mut self, input: impl Into<RateKey>) -> Self {
        self.rate_key = Some(input.into());
        self
    }

    /// Maximum number of requests from one IP address in any five-minute period.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rate_limit(&self) -> Option<i64> {
        self.rate_limit
    }

    /// Sets `RateLimit`; `None` clears it.
    pub fn set_rate_limit(&mut self, input: Option<i64>) -> &mut Self {
        self.rate_limit = input;
        self
    }

    /// Sets `RateLimit` and returns the updated value.
    #[must_use]
    pub fn with_rate_limit(mut self, input: i64) -> Self {
        self.rate_limit = Some(input);
        self
    }
}

impl fmt::Display for RateBasedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for RateBasedRule {
    fn schema(&self) -> &'static ShapeSchema {
        &RATE_BASED_RULE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "MatchPredicates" => schema::value_of(self.match_predicates.as_ref()),
            "RateKey" => schema::value_of(self.rate_key.as_ref()),
            "RateLimit" => schema::value_of(self.rate_limit.as_ref()),
            _ => None,
        }
    }
}

static RATE_BASED_RULE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "RateBasedRule",
    members: &[
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "MatchPredicates",
            target: "Predicates",
            kind: MemberKind::List(&ItemSchema {
                target: "Predicate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RateKey",
            target: "RateKey",
            kind: MemberKind::Enum(RateKey::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RateLimit",
            target: "RateLimit",
            kind: MemberKind::Long,
            required: true,
            constraints: constraints::RATE_LIMIT,
        },
    ],
};

/// Inserts a regex match tuple into, or deletes one from, a regex match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegexMatchSetUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<ChangeAction>,
    #[serde(rename = "RegexMatchTuple", skip_serializing_if = "Option::is_none")]
    regex_match_tuple: Option<RegexMatchTuple>,
}

impl RegexMatchSetUpdate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &REGEX_MATCH_SET_UPDATE_SCHEMA
    }

    /// The `Action` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<ChangeAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<ChangeAction>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// The part of a request to search, the transformation to apply first, and the pattern set to search with.
    ///
    /// Required by the service.
    #[must_use]
    pub fn regex_match_tuple(&self) -> Option<&RegexMatchTuple> {
        self.regex_match_tuple.as_ref()
    }

    /// Sets `RegexMatchTuple`; `None` clears it.
    pub fn set_regex_match_tuple(&mut self, input: Option<RegexMatchTuple>) -> &mut Self {
        self.regex_match_tuple = input;
        self
    }

    /// Sets `RegexMatchTuple` and returns the updated value.
    #[must_use]
    pub fn with_regex_match_tuple(mut self, input: RegexMatchTuple) -> Self {
        self.regex_match_tuple = Some(input);
        self
    }
}

impl fmt::Display for RegexMatchSetUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for RegexMatchSetUpdate {
    fn schema(&self) -> &'static ShapeSchema {
        &REGEX_MATCH_SET_UPDATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Action" => schema::value_of(self.action.as_ref()),
            "RegexMatchTuple" => schema::value_of(self.regex_match_tuple.as_ref()),
            _ => None,
        }
    }
}

static REGEX_MATCH_SET_UPDATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "RegexMatchSetUpdate",
    members: &[
        MemberSchema {
            name: "Action",
            target: "ChangeAction",
            kind: MemberKind::Enum(ChangeAction::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RegexMatchTuple",
            target: "RegexMatchTuple",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// The part of a request to search, the transformation to apply first, and the pattern set to search with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegexMatchTuple {
    #[serde(rename = "FieldToMatch", skip_serializing_if = "Option::is_none")]
    field_to_match: Option<FieldToMatch>,
    #[serde(rename = "TextTransformation", skip_serializing_if = "Option::is_none")]
    text_transformation: Option<TextTransformation>,
    #[serde(rename = "RegexPatternSetId", skip_serializing_if = "Option::is_none")]
    regex_pattern_set_id: Option<String>,
}

impl RegexMatchTuple {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &REGEX_MATCH_TUPLE_SCHEMA
    }

    /// The part of a web request that WAF inspects.
    ///
    /// Required by the service.
    #[must_use]
    pub fn field_to_match(&self) -> Option<&FieldToMatch> {
        self.field_to_match.as_ref()
    }

    /// Sets `FieldToMatch`; `None` clears it.
    pub fn set_field_to_match(&mut self, input: Option<FieldToMatch>) -> &mut Self {
        self.field_to_match = input;
        self
    }

    /// Sets `FieldToMatch` and returns the updated value.
    #[must_use]
    pub fn with_field_to_match(mut self, input: FieldToMatch) -> Self {
        self.field_to_match = Some(input);
        self
    }

    /// Text transformations applied to a request component before inspection.
    ///
    /// Required by the service.
    #[must_use]
    pub fn text_transformation(&self) -> Option<&TextTransformation> {
        self.text_transformation.as_ref()
    }

    /// Sets `TextTransformation`; `None` clears it.
    pub fn set_text_transformation(&mut self, input: Option<TextTransformation>) -> &mut Self {
        self.text_transformation = input;
        self
    }

    /// Sets `TextTransformation` and returns the updated value.
    #[must_use]
    pub fn with_text_transformation(mut self, input: impl Into<TextTransformation>) -> Self {
        self.text_transformation = Some(input.into());
        self
    }

    /// The `RegexPatternSetId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn regex_pattern_set_id(&self) -> Option<&str> {
        self.regex_pattern_set_id.as_deref()
    }

    /// Sets `RegexPatternSetId`; `None` clears it.
    pub fn set_regex_pattern_set_id(&mut self, input: Option<String>) -> &mut Self {
        self.regex_pattern_set_id = input;
        self
    }

    /// Sets `RegexPatternSetId` and returns the updated value.
    #[must_use]
    pub fn with_regex_pattern_set_id(mut self, input: impl Into<String>) -> Self {
        self.regex_pattern_set_id = Some(input.into());
        self
    }
}

impl fmt::Display for RegexMatchTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for RegexMatchTuple {
    fn schema(&self) -> &'static ShapeSchema {
        &REGEX_MATCH_TUPLE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "FieldToMatch" => schema::value_of(self.field_to_match.as_ref()),
            "TextTransformation" => schema::value_of(self.text_transformation.as_ref()),
            "RegexPatternSetId" => schema::value_of(self.regex_pattern_set_id.as_ref()),
            _ => None,
        }
    }
}

static REGEX_MATCH_TUPLE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "RegexMatchTuple",
    members: &[
        MemberSchema {
            name: "FieldToMatch",
            target: "FieldToMatch",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "TextTransformation",
            target: "TextTransformation",
            kind: MemberKind::Enum(TextTransformation::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RegexPatternSetId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
    ],
};

/// A combination of predicates that identifies the web requests to allow, block, or count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "Predicates", skip_serializing_if = "Option::is_none")]
    predicates: Option<Vec<Predicate>>,
}

impl Rule {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &RULE_SCHEMA
    }

    /// The `RuleId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Sets `RuleId`; `None` clears it.
    pub fn set_rule_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_id = input;
        self
    }

    /// Sets `RuleId` and returns the updated value.
    #[must_use]
    pub fn with_rule_id(mut self, input: impl Into<String>) -> Self {
        self.rule_id = Some(input.into());
        self
    }

    /// The `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The `Predicates` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn predicates(&self) -> Option<&[Predicate]> {
        self.predicates.as_deref()
    }

    /// Sets `Predicates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_predicates(&mut self, input: Option<&[Predicate]>) -> &mut Self {
        self.predicates = input.map(<[Predicate]>::to_vec);
        self
    }

    /// Sets `Predicates` and returns the updated value.
    #[must_use]
    pub fn with_predicates(mut self, input: &[Predicate]) -> Self {
        self.predicates = Some(input.to_vec());
        self
    }

    /// Appends to `Predicates`, creating the list if it is unset.
    #[must_use]
    pub fn append_predicates(mut self, items: impl IntoIterator<Item = Predicate>) -> Self {
        let list = self.predicates.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for Rule {
    fn schema(&self) -> &'static ShapeSchema {
        &RULE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "Predicates" => schema::value_of(self.predicates.as_ref()),
            _ => None,
        }
    }
}

static RULE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "Rule",
    members: &[
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "Predicates",
            target: "Predicates",
            kind: MemberKind::List(&ItemSchema {
                target: "Predicate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// A collection of predefined rules added to a web ACL as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(rename = "RuleGroupId", skip_serializing_if = "Option::is_none")]
    rule_group_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
}

impl RuleGroup {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &RULE_GROUP_SCHEMA
    }

    /// The `RuleGroupId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_group_id(&self) -> Option<&str> {
        self.rule_group_id.as_deref()
    }

    /// Sets `RuleGroupId`; `None` clears it.
    pub fn set_rule_group_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_group_id = input;
        self
    }

    /// Sets `RuleGroupId` and returns the updated value.
    #[must_use]
    pub fn with_rule_group_id(mut self, input: impl Into<String>) -> Self {
        self.rule_group_id = Some(input.into());
        self
    }

    /// The `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }
}

impl fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for RuleGroup {
    fn schema(&self) -> &'static ShapeSchema {
        &RULE_GROUP_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleGroupId" => schema::value_of(self.rule_group_id.as_ref()),
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            _ => None,
        }
    }
}

static RULE_GROUP_SCHEMA: ShapeSchema = ShapeSchema {
    name: "RuleGroup",
    members: &[
        MemberSchema {
            name: "RuleGroupId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::METRIC_NAME,
        },
    ],
};

/// Inserts a predicate into, or deletes a predicate from, a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<ChangeAction>,
    #[serde(rename = "Predicate", skip_serializing_if = "Option::is_none")]
    predicate: Option<Predicate>,
}

impl RuleUpdate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &RULE_UPDATE_SCHEMA
    }

    /// The `Action` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<ChangeAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<ChangeAction>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// A condition (match set) referenced from a rule, optionally negated.
    ///
    /// Required by the service.
    #[must_use]
    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    /// Sets `Predicate`; `None` clears it.
    pub fn set_predicate(&mut self, input: Option<Predicate>) -> &mut Self {
        self.predicate = input;
        self
    }

    /// Sets `Predicate` and returns the updated value.
    #[must_use]
    pub fn with_predicate(mut self, input: Predicate) -> Self {
        self.predicate = Some(input);
        self
    }
}

impl fmt::Display for RuleUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for RuleUpdate {
    fn schema(&self) -> &'static ShapeSchema {
        &RULE_UPDATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Action" => schema::value_of(self.action.as_ref()),
            "Predicate" => schema::value_of(self.predicate.as_ref()),
            _ => None,
        }
    }
}

static RULE_UPDATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "RuleUpdate",
    members: &[
        MemberSchema {
            name: "Action",
            target: "ChangeAction",
            kind: MemberKind::Enum(ChangeAction::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Predicate",
            target: "Predicate",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// A web request that WAF sampled for a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampledHTTPRequest {
    #[serde(rename = "Request", skip_serializing_if = "Option::is_none")]
    request: Option<HTTPRequest>,
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    weight: Option<i64>,
    #[serde(
        rename = "Timestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(
        rename = "RuleWithinRuleGroup",
        skip_serializing_if = "Option::is_none"
    )]
    rule_within_rule_group: Option<String>,
}

impl SampledHTTPRequest {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &SAMPLED_HTTP_REQUEST_SCHEMA
    }

    /// The components of a sampled web request.
    ///
    /// Required by the service.
    #[must_use]
    pub fn request(&self) -> Option<&HTTPRequest> {
        self.request.as_ref()
    }

    /// Sets `Request`; `None` clears it.
    pub fn set_request(&mut self, input: Option<HTTPRequest>) -> &mut Self {
        self.request = input;
        self
    }

    /// Sets `Request` and returns the updated value.
    #[must_use]
    pub fn with_request(mut self, input: HTTPRequest) -> Self {
        self.request = Some(input);
        self
    }

    /// Relative weight of this request compared with the other sampled requests.
    ///
    /// Required by the service.
    #[must_use]
    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    /// Sets `Weight`; `None` clears it.
    pub fn set_weight(&mut self, input: Option<i64>) -> &mut Self {
        self.weight = input;
        self
    }

    /// Sets `Weight` and returns the updated value.
    #[must_use]
    pub fn with_weight(mut self, input: i64) -> Self {
        self.weight = Some(input);
        self
    }

    /// The `Timestamp` member.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Sets `Timestamp`; `None` clears it.
    pub fn set_timestamp(&mut self, input: Option<DateTime<Utc>>) -> &mut Self {
        self.timestamp = input;
        self
    }

    /// Sets `Timestamp` and returns the updated value.
    #[must_use]
    pub fn with_timestamp(mut self, input: DateTime<Utc>) -> Self {
        self.timestamp = Some(input);
        self
    }

    /// The action taken for the request: ALLOW, BLOCK, or COUNT.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<String>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<String>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// The `RuleWithinRuleGroup` member.
    #[must_use]
    pub fn rule_within_rule_group(&self) -> Option<&str> {
        self.rule_within_rule_group.as_deref()
    }

    /// Sets `RuleWithinRuleGroup`; `None` clears it.
    pub fn set_rule_within_rule_group(&mut self, input: Option<String>) -> &mut Self {
        self.rule_within_rule_group = input;
        self
    }

    /// Sets `RuleWithinRuleGroup` and returns the updated value.
    #[must_use]
    pub fn with_rule_within_rule_group(mut self, input: impl Into<String>) -> Self {
        self.rule_within_rule_group = Some(input.into());
        self
    }
}

impl fmt::Display for SampledHTTPRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for SampledHTTPRequest {
    fn schema(&self) -> &'static ShapeSchema {
        &SAMPLED_HTTP_REQUEST_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Request" => schema::value_of(self.request.as_ref()),
            "Weight" => schema::value_of(self.weight.as_ref()),
            "Timestamp" => schema::value_of(self.timestamp.as_ref()),
            "Action" => schema::value_of(self.action.as_ref()),
            "RuleWithinRuleGroup" => schema::value_of(self.rule_within_rule_group.as_ref()),
            _ => None,
        }
    }
}

static SAMPLED_HTTP_REQUEST_SCHEMA: ShapeSchema = ShapeSchema {
    name: "SampledHTTPRequest",
    members: &[
        MemberSchema {
            name: "Request",
            target: "HTTPRequest",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Weight",
            target: "SampleWeight",
            kind: MemberKind::Long,
            required: true,
            constraints: constraints::SAMPLE_WEIGHT,
        },
        MemberSchema {
            name: "Timestamp",
            target: "Timestamp",
            kind: MemberKind::Timestamp,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Action",
            target: "Action",
            kind: MemberKind::String,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RuleWithinRuleGroup",
            target: "ResourceId",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_ID,
        },
    ],
};

/// A key/value label attached to a WAF resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Tag {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &TAG_SCHEMA
    }

    /// The `Key` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Sets `Key`; `None` clears it.
    pub fn set_key(&mut self, input: Option<String>) -> &mut Self {
        self.key = input;
        self
    }

    /// Sets `Key` and returns the updated value.
    #[must_use]
    pub fn with_key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The `Value` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets `Value`; `None` clears it.
    pub fn set_value(&mut self, input: Option<String>) -> &mut Self {
        self.value = input;
        self
    }

    /// Sets `Value` and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for Tag {
    fn schema(&self) -> &'static ShapeSchema {
        &TAG_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Key" => schema::value_of(self.key.as_ref()),
            "Value" => schema::value_of(self.value.as_ref()),
            _ => None,
        }
    }
}

static TAG_SCHEMA: ShapeSchema = ShapeSchema {
    name: "Tag",
    members: &[
        MemberSchema {
            name: "Key",
            target: "TagKey",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::TAG_KEY,
        },
        MemberSchema {
            name: "Value",
            target: "TagValue",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::TAG_VALUE,
        },
    ],
};

/// A time range of up to three hours within the previous three hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(
        rename = "StartTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    start_time: Option<DateTime<Utc>>,
    #[serde(
        rename = "EndTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::epoch_seconds"
    )]
    end_time: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &TIME_WINDOW_SCHEMA
    }

    /// Beginning of the sampling window, in UTC.
    ///
    /// Required by the service.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Sets `StartTime`; `None` clears it.
    pub fn set_start_time(&mut self, input: Option<DateTime<Utc>>) -> &mut Self {
        self.start_time = input;
        self
    }

    /// Sets `StartTime` and returns the updated value.
    #[must_use]
    pub fn with_start_time(mut self, input: DateTime<Utc>) -> Self {
        self.start_time = Some(input);
        self
    }

    /// End of the sampling window, in UTC.
    ///
    /// Required by the service.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Sets `EndTime`; `None` clears it.
    pub fn set_end_time(&mut self, input: Option<DateTime<Utc>>) -> &mut Self {
        self.end_time = input;
        self
    }

    /// Sets `EndTime` and returns the updated value.
    #[must_use]
    pub fn with_end_time(mut self, input: DateTime<Utc>) -> Self {
        self.end_time = Some(input);
        self
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for TimeWindow {
    fn schema(&self) -> &'static ShapeSchema {
        &TIME_WINDOW_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "StartTime" => schema::value_of(self.start_time.as_ref()),
            "EndTime" => schema::value_of(self.end_time.as_ref()),
            _ => None,
        }
    }
}

static TIME_WINDOW_SCHEMA: ShapeSchema = ShapeSchema {
    name: "TimeWindow",
    members: &[
        MemberSchema {
            name: "StartTime",
            target: "Timestamp",
            kind: MemberKind::Timestamp,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "EndTime",
            target: "Timestamp",
            kind: MemberKind::Timestamp,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};

/// The action taken when a request matches a rule or no rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WafAction {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<WafActionType>,
}

impl WafAction {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &WAF_ACTION_SCHEMA
    }

    /// The `Type` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&WafActionType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<WafActionType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<WafActionType>) -> Self {
        self.r#type = Some(input.into());
        self
    }
}

impl fmt::Display for WafAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for WafAction {
    fn schema(&self) -> &'static ShapeSchema {
        &WAF_ACTION_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Type" => schema::value_of(self.r#type.as_ref()),
            _ => None,
        }
    }
}

static WAF_ACTION_SCHEMA: ShapeSchema = ShapeSchema {
    name: "WafAction",
    members: &[MemberSchema {
        name: "Type",
        target: "WafActionType",
        kind: MemberKind::Enum(WafActionType::VALUES),
        required: true,
        constraints: Constraints::NONE,
    }],
};

/// Overrides the actions of the rules inside a rule group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WafOverrideAction {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    r#type: Option<WafOverrideActionType>,
}

impl WafOverrideAction {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &WAF_OVERRIDE_ACTION_SCHEMA
    }

    /// The `Type` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn r#type(&self) -> Option<&WafOverrideActionType> {
        self.r#type.as_ref()
    }

    /// Sets `Type`; `None` clears it.
    pub fn set_type(&mut self, input: Option<WafOverrideActionType>) -> &mut Self {
        self.r#type = input;
        self
    }

    /// Sets `Type` and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, input: impl Into<WafOverrideActionType>) -> Self {
        self.r#type = Some(input.into());
        self
    }
}

impl fmt::Display for WafOverrideAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for WafOverrideAction {
    fn schema(&self) -> &'static ShapeSchema {
        &WAF_OVERRIDE_ACTION_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Type" => schema::value_of(self.r#type.as_ref()),
            _ => None,
        }
    }
}

static WAF_OVERRIDE_ACTION_SCHEMA: ShapeSchema = ShapeSchema {
    name: "WafOverrideAction",
    members: &[MemberSchema {
        name: "Type",
        target: "WafOverrideActionType",
        kind: MemberKind::Enum(WafOverrideActionType::VALUES),
        required: true,
        constraints: Constraints::NONE,
    }],
};

/// Rules, their actions, and the default action that together inspect web requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebACL {
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    web_acl_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "DefaultAction", skip_serializing_if = "Option::is_none")]
    default_action: Option<WafAction>,
    #[serde(rename = "Rules", skip_serializing_if = "Option::is_none")]
    rules: Option<Vec<ActivatedRule>>,
    #[serde(rename = "WebACLArn", skip_serializing_if = "Option::is_none")]
    web_acl_arn: Option<String>,
}

impl WebACL {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &WEB_ACL_SCHEMA
    }

    /// The `WebACLId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn web_acl_id(&self) -> Option<&str> {
        self.web_acl_id.as_deref()
    }

    /// Sets `WebACLId`; `None` clears it.
    pub fn set_web_acl_id(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_id = input;
        self
    }

    /// Sets `WebACLId` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_id(mut self, input: impl Into<String>) -> Self {
        self.web_acl_id = Some(input.into());
        self
    }

    /// The `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The action taken when a request matches a rule or no rule matches.
    ///
    /// Required by the service.
    #[must_use]
    pub fn default_action(&self) -> Option<&WafAction> {
        self.default_action.as_ref()
    }

    /// Sets `DefaultAction`; `None` clears it.
    pub fn set_default_action(&mut self, input: Option<WafAction>) -> &mut Self {
        self.default_action = input;
        self
    }

    /// Sets `DefaultAction` and returns the updated value.
    #[must_use]
    pub fn with_default_action(mut self, input: WafAction) -> Self {
        self.default_action = Some(input);
        self
    }

    /// The `Rules` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rules(&self) -> Option<&[ActivatedRule]> {
        self.rules.as_deref()
    }

    /// Sets `Rules`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_rules(&mut self, input: Option<&[ActivatedRule]>) -> &mut Self {
        self.rules = input.map(<[ActivatedRule]>::to_vec);
        self
    }

    /// Sets `Rules` and returns the updated value.
    #[must_use]
    pub fn with_rules(mut self, input: &[ActivatedRule]) -> Self {
        self.rules = Some(input.to_vec());
        self
    }

    /// Appends to `Rules`, creating the list if it is unset.
    #[must_use]
    pub fn append_rules(mut self, items: impl IntoIterator<Item = ActivatedRule>) -> Self {
        let list = self.rules.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The `WebACLArn` member.
    #[must_use]
    pub fn web_acl_arn(&self) -> Option<&str> {
        self.web_acl_arn.as_deref()
    }

    /// Sets `WebACLArn`; `None` clears it.
    pub fn set_web_acl_arn(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_arn = input;
        self
    }

    /// Sets `WebACLArn` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_arn(mut self, input: impl Into<String>) -> Self {
        self.web_acl_arn = Some(input.into());
        self
    }
}

impl fmt::Display for WebACL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for WebACL {
    fn schema(&self) -> &'static ShapeSchema {
        &WEB_ACL_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACLId" => schema::value_of(self.web_acl_id.as_ref()),
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "DefaultAction" => schema::value_of(self.default_action.as_ref()),
            "Rules" => schema::value_of(self.rules.as_ref()),
            "WebACLArn" => schema::value_of(self.web_acl_arn.as_ref()),
            _ => None,
        }
    }
}

static WEB_ACL_SCHEMA: ShapeSchema = ShapeSchema {
    name: "WebACL",
    members: &[
        MemberSchema {
            name: "WebACLId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "DefaultAction",
            target: "WafAction",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "Rules",
            target: "ActivatedRules",
            kind: MemberKind::List(&ItemSchema {
                target: "ActivatedRule",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "WebACLArn",
            target: "ResourceArn",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::RESOURCE_ARN,
        },
    ],
};

/// Identifier and name of a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebACLSummary {
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    web_acl_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl WebACLSummary {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &WEB_ACL_SUMMARY_SCHEMA
    }

    /// The `WebACLId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn web_acl_id(&self) -> Option<&str> {
        self.web_acl_id.as_deref()
    }

    /// Sets `WebACLId`; `None` clears it.
    pub fn set_web_acl_id(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_id = input;
        self
    }

    /// Sets `WebACLId` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_id(mut self, input: impl Into<String>) -> Self {
        self.web_acl_id = Some(input.into());
        self
    }

    /// The `Name` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }
}

impl fmt::Display for WebACLSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for WebACLSummary {
    fn schema(&self) -> &'static ShapeSchema {
        &WEB_ACL_SUMMARY_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACLId" => schema::value_of(self.web_acl_id.as_ref()),
            "Name" => schema::value_of(self.name.as_ref()),
            _ => None,
        }
    }
}

static WEB_ACL_SUMMARY_SCHEMA: ShapeSchema = ShapeSchema {
    name: "WebACLSummary",
    members: &[
        MemberSchema {
            name: "WebACLId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_NAME,
        },
    ],
};

/// Inserts an activated rule into, or deletes one from, a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebACLUpdate {
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    action: Option<ChangeAction>,
    #[serde(rename = "ActivatedRule", skip_serializing_if = "Option::is_none")]
    activated_rule: Option<ActivatedRule>,
}

impl WebACLUpdate {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &WEB_ACL_UPDATE_SCHEMA
    }

    /// The `Action` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }

    /// Sets `Action`; `None` clears it.
    pub fn set_action(&mut self, input: Option<ChangeAction>) -> &mut Self {
        self.action = input;
        self
    }

    /// Sets `Action` and returns the updated value.
    #[must_use]
    pub fn with_action(mut self, input: impl Into<ChangeAction>) -> Self {
        self.action = Some(input.into());
        self
    }

    /// A rule placed in a web ACL together with its priority and action.
    ///
    /// Required by the service.
    #[must_use]
    pub fn activated_rule(&self) -> Option<&ActivatedRule> {
        self.activated_rule.as_ref()
    }

    /// Sets `ActivatedRule`; `None` clears it.
    pub fn set_activated_rule(&mut self, input: Option<ActivatedRule>) -> &mut Self {
        self.activated_rule = input;
        self
    }

    /// Sets `ActivatedRule` and returns the updated value.
    #[must_use]
    pub fn with_activated_rule(mut self, input: ActivatedRule) -> Self {
        self.activated_rule = Some(input);
        self
    }
}

impl fmt::Display for WebACLUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for WebACLUpdate {
    fn schema(&self) -> &'static ShapeSchema {
        &WEB_ACL_UPDATE_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Action" => schema::value_of(self.action.as_ref()),
            "ActivatedRule" => schema::value_of(self.activated_rule.as_ref()),
            _ => None,
        }
    }
}

static WEB_ACL_UPDATE_SCHEMA: ShapeSchema = ShapeSchema {
    name: "WebACLUpdate",
    members: &[
        MemberSchema {
            name: "Action",
            target: "ChangeAction",
            kind: MemberKind::Enum(ChangeAction::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "ActivatedRule",
            target: "ActivatedRule",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};
