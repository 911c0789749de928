//! Static index fixtures used across harnesses.
//!
//! `FONA_FUNCTIONS_6` is a verbatim generator bucket file: every function of
//! a cellular-modem driver whose key falls in the `g` bucket. The other
//! fixtures are small hand-written tables in the canonical JSON format.

/// `html/search/functions_6.js` as the generator wrote it.
pub const FONA_FUNCTIONS_6: &str = r#"var searchData=
[
  ['getadcvoltage',['getADCVoltage',['../class_adafruit___f_o_n_a.html#af98a2d4a2d1e4592b84fd902a4c0c848',1,'Adafruit_FONA']]],
  ['getbattpercent',['getBattPercent',['../class_adafruit___f_o_n_a.html#a8a8cb868daf6967372289312e8082a0b',1,'Adafruit_FONA']]],
  ['getbattvoltage',['getBattVoltage',['../class_adafruit___f_o_n_a.html#a93135876181b5d1a10d3b66b6fe830b9',1,'Adafruit_FONA::getBattVoltage()'],['../class_adafruit___f_o_n_a__3_g.html#aacb673053ace90119d206c0d56002850',1,'Adafruit_FONA_3G::getBattVoltage()']]],
  ['getcallstatus',['getCallStatus',['../class_adafruit___f_o_n_a.html#abb0dc52d105851936462c1deec1ed6c4',1,'Adafruit_FONA']]],
  ['getfmsignallevel',['getFMSignalLevel',['../class_adafruit___f_o_n_a.html#a764ea2694ea772188cb19c389a8eaea0',1,'Adafruit_FONA']]],
  ['getfmvolume',['getFMVolume',['../class_adafruit___f_o_n_a.html#a90fd00474d270bfb65066f05cedcf3f2',1,'Adafruit_FONA']]],
  ['getgps',['getGPS',['../class_adafruit___f_o_n_a.html#ab6fcfbf319fd8a308628a42d8bbe4ce5',1,'Adafruit_FONA::getGPS(uint8_t arg, char *buffer, uint8_t maxbuff)'],['../class_adafruit___f_o_n_a.html#ac4f87f5bd23380bca91f379740e8fa45',1,'Adafruit_FONA::getGPS(float *lat, float *lon, float *speed_kph=0, float *heading=0, float *altitude=0)']]],
  ['getgsmloc',['getGSMLoc',['../class_adafruit___f_o_n_a.html#aec78d5da0f0de33142277e985a6d1b7a',1,'Adafruit_FONA::getGSMLoc(uint16_t *replycode, char *buff, uint16_t maxlen)'],['../class_adafruit___f_o_n_a.html#aa77e567c958ace445c7e08795667f348',1,'Adafruit_FONA::getGSMLoc(float *lat, float *lon)']]],
  ['getimei',['getIMEI',['../class_adafruit___f_o_n_a.html#abbdf7a9e51ccf53621b4a800cdb8eb9f',1,'Adafruit_FONA']]],
  ['getnetworkstatus',['getNetworkStatus',['../class_adafruit___f_o_n_a.html#a23f938ff05745c95fcdb7200834e0bbb',1,'Adafruit_FONA']]],
  ['getnumsms',['getNumSMS',['../class_adafruit___f_o_n_a.html#aae92a07a7e7228ebfb38b3bd1b03d291',1,'Adafruit_FONA']]],
  ['getreply',['getReply',['../class_adafruit___f_o_n_a.html#a98d2aec43e33ce765a47a6f73102a403',1,'Adafruit_FONA::getReply(char *send, uint16_t timeout=FONA_DEFAULT_TIMEOUT_MS)'],['../class_adafruit___f_o_n_a.html#a9062ff06833c9de8c4402e11abe4c232',1,'Adafruit_FONA::getReply(FONAFlashStringPtr send, uint16_t timeout=FONA_DEFAULT_TIMEOUT_MS)'],['../class_adafruit___f_o_n_a.html#acf2da9eddc27493c8a05594b23e632c8',1,'Adafruit_FONA::getReply(FONAFlashStringPtr prefix, char *suffix, uint16_t timeout=FONA_DEFAULT_TIMEOUT_MS)'],['../class_adafruit___f_o_n_a.html#a198a5ebe2781e5e4b992c665f0fddbc6',1,'Adafruit_FONA::getReply(FONAFlashStringPtr prefix, int32_t suffix, uint16_t timeout=FONA_DEFAULT_TIMEOUT_MS)'],['../class_adafruit___f_o_n_a.html#a217d58f02db6e264377a52cb58c4d868',1,'Adafruit_FONA::getReply(FONAFlashStringPtr prefix, int32_t suffix1, int32_t suffix2, uint16_t timeout)']]],
  ['getreplyquoted',['getReplyQuoted',['../class_adafruit___f_o_n_a.html#ad2a07773cc0f0f2c735434c3deb8cd94',1,'Adafruit_FONA']]],
  ['getrssi',['getRSSI',['../class_adafruit___f_o_n_a.html#ad8249cf1af16521cda696e2a759658a6',1,'Adafruit_FONA']]],
  ['getsimccid',['getSIMCCID',['../class_adafruit___f_o_n_a.html#a08f321d0676c03760b44f43a260a0c3c',1,'Adafruit_FONA']]],
  ['getsmsinterrupt',['getSMSInterrupt',['../class_adafruit___f_o_n_a.html#aa1df08d3e6864a9e9562b80e25ee3b2d',1,'Adafruit_FONA']]],
  ['getsmssender',['getSMSSender',['../class_adafruit___f_o_n_a.html#a87a62990135a1023846e3cb2edd54c6d',1,'Adafruit_FONA']]],
  ['gettime',['getTime',['../class_adafruit___f_o_n_a.html#a4e6f0f207c39132bb74fea2221a75a9e',1,'Adafruit_FONA']]],
  ['getvolume',['getVolume',['../class_adafruit___f_o_n_a.html#adda37f8d1deee3b6286347510bc0afad',1,'Adafruit_FONA']]],
  ['gprsstate',['GPRSstate',['../class_adafruit___f_o_n_a.html#aa08364d4b361a7a3852191b9b7ed1110',1,'Adafruit_FONA']]],
  ['gpsstatus',['GPSstatus',['../class_adafruit___f_o_n_a.html#aaf77aa8e9d4b7999616f6850a0e1ee3f',1,'Adafruit_FONA']]]
];
"#;

/// Number of entries in [`FONA_FUNCTIONS_6`].
pub const FONA_FUNCTIONS_6_ENTRIES: usize = 21;

/// The two-overload example table in canonical form.
pub const GETGPS_JSON: &str = r#"[
  ["getgps", ["getGPS", [
    ["anchor1", "getGPS(uint8_t,...)", "Adafruit_FONA"],
    ["anchor2", "getGPS(float*,...)", "Adafruit_FONA"]
  ]]]
]"#;

/// A classes bucket: class entries carry an empty scope label.
pub const FONA_CLASSES_0: &str = "var searchData=
[
  ['adafruit_5ffona',['Adafruit_FONA',['../class_adafruit___f_o_n_a.html',1,'']]],
  ['adafruit_5ffona_5f3g',['Adafruit_FONA_3G',['../class_adafruit___f_o_n_a__3_g.html',1,'']]]
];
";

/// Anchors in [`FONA_FUNCTIONS_6`] for the two `getGPS` overloads.
pub const GETGPS_ANCHORS: [&str; 2] = [
    "../class_adafruit___f_o_n_a.html#ab6fcfbf319fd8a308628a42d8bbe4ce5",
    "../class_adafruit___f_o_n_a.html#ac4f87f5bd23380bca91f379740e8fa45",
];
